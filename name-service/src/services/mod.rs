pub mod name_generator;
pub mod prompt;
pub mod providers;

pub use name_generator::{GenerateNameError, NameGenerator};

//! Prompt template for the short-name transformation.

/// Few-shot pairs shown to the model: full name, short name with reading.
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    ("山田太郎", "山（サン）"),
    ("佐藤花子", "花（ハナ）"),
    ("木村美咲", "咲（サキ）"),
    ("高橋健太", "橋（キョウ）"),
    ("渡辺優子", "優（ユウ）"),
    ("萩野千尋", "千（セン）"),
    ("伊藤さくら", "藤（トウ）"),
    ("ニギハヤミコハクヌシ", "ハク（ハク）"),
];

/// Build the instruction sent to the model for `name`.
///
/// The output is a pure function of `name`.
pub fn build_prompt(name: &str) -> String {
    let examples: String = FEW_SHOT_EXAMPLES
        .iter()
        .map(|(input, output)| format!("* 入力：{} → 出力：{}\n", input, output))
        .collect();

    format!(
        "あなたは銭婆の姉である湯婆婆です。贅沢な名前「{name}」を入力されたら、その名前から短く呼びやすい新しい名前を与えてください。\
新しい名前は、元の名前の漢字一文字（読みは元の名前に近いもの、または音読み）、または作中に登場する「千（セン）」や「ハク」のように非常に短い名前にしてください。\
新しい短い名前には読み仮名を（）で添えてください。\n\
\n\
以下に名前変換の例を示します。\n\
\n\
{examples}\
\n\
入力された名前に基づき、新しい短い名前（読み）のみを返してください。余計な前置きや説明は不要です。\n\
\n\
入力：{name}\n\
出力："
    )
}

//! 推薦サービスへ送るプロンプト

use super::ReadingLevel;

/// 1 回の依頼で求める冊数
pub const RECOMMENDATION_COUNT: usize = 6;
/// 応答長の上限
pub const MAX_TOKENS: u32 = 1000;

/// 選択をそのまま埋め込んだ指示文を作る
pub fn build_prompt(genre: &str, mood: &str, level: ReadingLevel) -> String {
    format!(
        "Recommend {count} books for a {level} {genre} reader feeling {mood}. \
         For each book, provide the title, author, and a brief explanation of why it \
         matches their mood and reading level. Format it clearly.",
        count = RECOMMENDATION_COUNT,
        level = level,
        genre = genre,
        mood = mood,
    )
}

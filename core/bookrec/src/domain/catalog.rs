//! ジャンル一覧とジャンル→気分の対応表（起動時に 1 回読み、以後は読み取りのみ）

use common::error::Error;
use serde::Deserialize;
use std::collections::HashMap;

/// ジャンルと、ジャンルごとに選べる気分
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MoodCatalog {
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    moods: HashMap<String, Vec<String>>,
}

impl MoodCatalog {
    #[cfg(test)]
    pub fn new(genres: Vec<String>, moods: HashMap<String, Vec<String>>) -> Self {
        Self { genres, moods }
    }

    /// `{"genres": [...], "moods": {genre: [...]}}` 形式の JSON から読む
    pub fn parse(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|e| Error::json(format!("Invalid catalog JSON: {}", e)))
    }

    /// 表示順のジャンル一覧
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// ジャンルで選べる気分。未知のジャンル（空文字列を含む）は空
    pub fn moods_for(&self, genre: &str) -> Vec<String> {
        self.moods.get(genre).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MoodCatalog {
        MoodCatalog::parse(
            r#"{"genres":["Fantasy","Mystery"],"moods":{"Fantasy":["Adventurous","Dark"]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_moods_for_known_genre_keeps_order() {
        assert_eq!(catalog().moods_for("Fantasy"), vec!["Adventurous", "Dark"]);
    }

    #[test]
    fn test_moods_for_unknown_or_empty_genre() {
        let c = catalog();
        assert!(c.moods_for("Mystery").is_empty());
        assert!(c.moods_for("").is_empty());
        assert!(c.moods_for("fantasy").is_empty());
    }

    #[test]
    fn test_parse_missing_sections_defaults_to_empty() {
        let c = MoodCatalog::parse("{}").unwrap();
        assert!(c.genres().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = MoodCatalog::parse("[1,2").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.exit_code(), 74);
    }
}

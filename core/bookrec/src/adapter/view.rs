//! 状態を端末向けの文字列に描画する

use crate::domain::{AppState, RecommendationEntry};

pub const LOADING_LABEL: &str = "Finding books...";

/// 現在の選択（未選択はプレースホルダ）
pub fn render_selection(state: &AppState) -> String {
    let sel = &state.selection;
    let genre = or_placeholder(&sel.genre, "Select genre");
    let mood = or_placeholder(&sel.mood, "Select mood");
    let level = sel
        .level
        .map(|l| l.label().to_string())
        .unwrap_or_else(|| "(Select level)".to_string());
    format!("Genre: {}\nMood:  {}\nLevel: {}", genre, mood, level)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("({})", placeholder)
    } else {
        value.to_string()
    }
}

/// 番号付きの選択肢（現在値には * を付ける）
pub fn render_options(title: &str, options: &[String], current: &str) -> String {
    if options.is_empty() {
        return format!("No {} options available.", title);
    }
    let mut out = format!("{}:", title);
    for (i, option) in options.iter().enumerate() {
        let marker = if option == current { "*" } else { " " };
        out.push_str(&format!("\n {} {:>2}. {}", marker, i + 1, option));
    }
    out
}

/// N 番目（1 始まり）の推薦
pub fn render_entry(index: usize, entry: &RecommendationEntry) -> String {
    format!("Recommendation {}\n{}", index + 1, entry.text())
}

/// 履歴全体（挿入順）
pub fn render_history(history: &[RecommendationEntry]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, e)| render_entry(i, e))
        .collect::<Vec<_>>()
        .join("\n\n")
}

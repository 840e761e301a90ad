//! Life themes from the engines' formatted text.

use confluence_core::ResultMap;

use crate::output::successful;
use crate::types::UnifiedThemes;

pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("purpose", &["purpose", "mission", "calling", "destiny", "life path"]),
    ("relationships", &["relationship", "love", "partner", "connection", "family"]),
    ("career", &["career", "work", "profession", "vocation", "business"]),
    ("growth", &["growth", "development", "evolution", "learning", "expansion"]),
    ("challenges", &["challenge", "obstacle", "shadow", "difficulty", "lesson"]),
    ("gifts", &["gift", "talent", "strength", "ability", "genius"]),
];

const NO_THEMES_NARRATIVE: &str =
    "No unifying theme surfaced yet; each engine offers its own distinct perspective.";

/// Themes found in any engine's `formattedOutput`, in table order.
pub fn extract(results: &ResultMap) -> UnifiedThemes {
    let texts: Vec<String> = successful(results)
        .map(|(_, output)| output.formatted_output().to_lowercase())
        .filter(|text| !text.is_empty())
        .collect();

    let themes: Vec<String> = THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| {
            texts
                .iter()
                .any(|text| keywords.iter().any(|k| text.contains(k)))
        })
        .map(|(theme, _)| (*theme).to_string())
        .collect();

    let narrative = narrative(&themes);
    UnifiedThemes { themes, narrative }
}

fn narrative(themes: &[String]) -> String {
    match themes {
        [] => NO_THEMES_NARRATIVE.to_string(),
        [only] => format!("This reading centers on the theme of {only}."),
        [init @ .., last] => format!(
            "This reading weaves together themes of {} and {last}.",
            init.join(", ")
        ),
    }
}

//! Display heuristics attached to each answer.
//!
//! Neither value is a calibrated signal: confidence is a fixed arithmetic
//! combination of answer length and keyword hits, and the source list is a
//! substring scan plus a few fixed suggestions. Both exist for presentation
//! only and the rest of the system must not branch on them.

const BASE_CONFIDENCE: f64 = 0.85;
const MAX_CONFIDENCE: f64 = 0.98;
const LENGTH_BONUS_CAP: f64 = 0.1;
const KEYWORD_BONUS: f64 = 0.01;
const MAX_SOURCES: usize = 5;

/// Keywords whose presence nudges the confidence score up.
const QUALITY_INDICATORS: [&str; 8] = [
    "required",
    "documents",
    "steps",
    "process",
    "regulations",
    "official",
    "website",
    "contact",
];

/// Institution-name substrings surfaced verbatim as sources.
const SOURCE_PATTERNS: [&str; 10] = [
    "Ministry",
    "Department",
    "Government",
    "Official",
    "Embassy",
    "Consulate",
    "Chamber of Commerce",
    "Registration Service",
    "Tax Authority",
    "Immigration",
];

/// Scores an answer in `[0, 1]`.
///
/// Base 0.85, plus up to 0.1 for length, plus 0.01 per matched quality
/// keyword, clamped at 0.98 and rounded to 2 decimals.
pub fn confidence(content: &str) -> f64 {
    let lower = content.to_lowercase();

    let length_bonus = (content.len() as f64 / 1000.0).min(LENGTH_BONUS_CAP);
    let quality_bonus = QUALITY_INDICATORS
        .into_iter()
        .filter(|kw| lower.contains(kw))
        .count() as f64
        * KEYWORD_BONUS;

    round2((BASE_CONFIDENCE + length_bonus + quality_bonus).min(MAX_CONFIDENCE))
}

/// Scans an answer for likely sources.
///
/// Case-insensitive institution-name matches come first, then fixed
/// suggestions keyed on "visa"/"travel", "business registration", and "tax".
/// Capped at 5 entries; `None` when nothing matched.
pub fn extract_sources(content: &str) -> Option<Vec<String>> {
    let lower = content.to_lowercase();

    let mut sources: Vec<String> = SOURCE_PATTERNS
        .into_iter()
        .filter(|p| lower.contains(&p.to_lowercase()))
        .map(str::to_string)
        .collect();

    if lower.contains("visa") || lower.contains("travel") {
        sources.extend(["Immigration Service".to_string(), "Embassy".to_string()]);
    }
    if lower.contains("business registration") {
        sources.extend([
            "Business Registration Service".to_string(),
            "Chamber of Commerce".to_string(),
        ]);
    }
    if lower.contains("tax") {
        sources.push("Tax Authority".to_string());
    }

    sources.truncate(MAX_SOURCES);
    if sources.is_empty() { None } else { Some(sources) }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

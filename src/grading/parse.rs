//! Model response parsing
//!
//! Splits the raw model text at the SUMMARY:/GRADE: markers and extracts a
//! letter grade from the grade block. Free-text parsing of model output is
//! a known limitation; the two-stage token search below is a heuristic,
//! not a guaranteed contract.

use serde::{Deserialize, Serialize};

const SUMMARY_MARKER: &str = "SUMMARY:";
const GRADE_MARKER: &str = "GRADE:";

/// The 13 accepted grade tokens
pub const VALID_GRADES: [&str; 13] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
];

// Fallback scan order: modifier tokens before their bare forms, so a bare
// "B" mention never shadows a later "B+".
const SCAN_PRIORITY: [&str; 13] = [
    "A+", "A-", "B+", "B-", "C+", "C-", "D+", "D-", "A", "B", "C", "D", "F",
];

/// Parsed analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    /// Narrative season evaluation
    pub summary: String,
    /// One of the 13 grade tokens, or "" when undetected
    pub grade: String,
    /// The full grade block, or "Grade not detected." on the degraded path
    pub grade_text: String,
}

impl GradeResult {
    pub fn grade_detected(&self) -> bool {
        !self.grade.is_empty()
    }
}

/// Parse the raw model response into summary and grade.
///
/// When both markers are present, text between them is the summary and the
/// grade letter comes from the grade block: the first whitespace token if
/// it is a valid grade, otherwise the first priority-order containment
/// match. When either marker is missing the entire response becomes the
/// summary and the grade is reported as undetected; that is a degraded
/// success, not an error.
pub fn parse_response(raw: &str) -> GradeResult {
    let raw = raw.trim();

    let (Some(summary_pos), Some(grade_pos)) = (raw.find(SUMMARY_MARKER), raw.find(GRADE_MARKER))
    else {
        return GradeResult {
            summary: raw.to_string(),
            grade: String::new(),
            grade_text: "Grade not detected.".to_string(),
        };
    };

    let summary_end = summary_pos + SUMMARY_MARKER.len();
    let summary = raw
        .get(summary_end..grade_pos)
        .unwrap_or("")
        .trim()
        .to_string();
    let grade_block = raw[grade_pos + GRADE_MARKER.len()..].trim();

    let (grade, grade_text) = match extract_grade(grade_block) {
        Some(grade) => (grade.to_string(), grade_block.to_string()),
        None => (String::new(), String::new()),
    };

    GradeResult {
        summary,
        grade,
        grade_text,
    }
}

/// Two-stage grade token extraction from the grade block
fn extract_grade(grade_block: &str) -> Option<&'static str> {
    // First whitespace token wins when it is already a valid grade.
    if let Some(first_token) = grade_block.split_whitespace().next() {
        if let Some(grade) = VALID_GRADES.iter().find(|g| **g == first_token).copied() {
            return Some(grade);
        }
    }

    // Otherwise scan for any valid token, modifiers first.
    SCAN_PRIORITY
        .iter()
        .find(|g| grade_block.contains(**g))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response() {
        let raw = "SUMMARY:\nA dominant season at the plate.\n\nGRADE:\nA+ An MVP-level campaign by every measure.";
        let result = parse_response(raw);
        assert_eq!(result.summary, "A dominant season at the plate.");
        assert_eq!(result.grade, "A+");
        assert!(result.grade_text.starts_with("A+"));
        assert!(result.grade_detected());
    }

    #[test]
    fn test_first_token_rule_takes_precedence_over_scan() {
        // First token "B" must win even though "B+" appears later.
        let raw = "SUMMARY:\nSolid year.\nGRADE:\nB overall, flirting with B+ in the second half.";
        let result = parse_response(raw);
        assert_eq!(result.grade, "B");
    }

    #[test]
    fn test_fallback_scan_prefers_modifier_tokens() {
        // No valid first token; "A-" must beat bare "A" in the scan.
        let raw = "SUMMARY:\nGood year.\nGRADE:\nSomewhere around A- for A effort.";
        let result = parse_response(raw);
        assert_eq!(result.grade, "A-");
    }

    #[test]
    fn test_fallback_scan_finds_parenthesized_grade() {
        let raw = "SUMMARY:\nFine season.\nGRADE:\nThe numbers point to (B+) territory.";
        let result = parse_response(raw);
        assert_eq!(result.grade, "B+");
    }

    #[test]
    fn test_missing_markers_degrade_to_full_summary() {
        let raw = "The player had an unremarkable season with few highlights.";
        let result = parse_response(raw);
        assert_eq!(result.summary, raw);
        assert_eq!(result.grade, "");
        assert_eq!(result.grade_text, "Grade not detected.");
        assert!(!result.grade_detected());
    }

    #[test]
    fn test_summary_marker_alone_degrades() {
        let raw = "SUMMARY:\nOnly a summary here, no grade section.";
        let result = parse_response(raw);
        assert_eq!(result.summary, raw);
        assert_eq!(result.grade_text, "Grade not detected.");
    }

    #[test]
    fn test_no_valid_token_anywhere_yields_empty_grade() {
        let raw = "SUMMARY:\nOk.\nGRADE:\nno letter given";
        let result = parse_response(raw);
        assert_eq!(result.summary, "Ok.");
        assert_eq!(result.grade, "");
    }

    #[test]
    fn test_grade_before_summary_yields_empty_summary() {
        let raw = "GRADE:\nB-\nSUMMARY:\nout of order";
        let result = parse_response(raw);
        assert_eq!(result.summary, "");
        assert_eq!(result.grade, "B-");
    }

    #[test]
    fn test_every_valid_grade_parses_as_first_token() {
        for grade in VALID_GRADES {
            let raw = format!("SUMMARY:\ns\nGRADE:\n{grade} explanation");
            let result = parse_response(&raw);
            assert_eq!(result.grade, grade, "failed for {grade}");
        }
    }
}

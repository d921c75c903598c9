//! Counting "XL" in recognized text

/// The fixed pattern, already lowercased
const TARGET: &str = "xl";

/// Outcome of scanning one text for the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    found: bool,
    count: usize,
}

impl ScanResult {
    pub fn from_count(count: usize) -> Self {
        Self {
            found: count > 0,
            count,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Count case-insensitive, non-overlapping occurrences of "xl".
///
/// Matching is leftmost-first: once a match is consumed the scan resumes
/// after it, so "xxl" and "xxxl" each contain one match.
pub fn find_xl(text: &str) -> ScanResult {
    let count = text.to_ascii_lowercase().matches(TARGET).count();
    ScanResult::from_count(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_match() {
        assert_eq!(find_xl(""), ScanResult::from_count(0));
        assert!(!find_xl("").found());
    }

    #[test]
    fn test_no_match() {
        let result = find_xl("Hello world");
        assert!(!result.found());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_single_match_any_case() {
        for text in ["xl", "XL", "Xl", "xL"] {
            let result = find_xl(text);
            assert!(result.found(), "{text}");
            assert_eq!(result.count(), 1, "{text}");
        }
    }

    #[test]
    fn test_detects_case_insensitive() {
        let result = find_xl("xxl XL xl");
        assert!(result.found());
        assert_eq!(result.count(), 3);
    }

    #[test]
    fn test_non_overlapping_scan() {
        assert_eq!(find_xl("xxxl").count(), 1);
        assert_eq!(find_xl("xXlL").count(), 1);
        assert_eq!(find_xl("xlxl").count(), 2);
        assert_eq!(find_xl("XLXLXL").count(), 3);
    }

    #[test]
    fn test_separated_letters_do_not_match() {
        assert_eq!(find_xl("x l").count(), 0);
        assert_eq!(find_xl("lx").count(), 0);
    }

    #[test]
    fn test_match_inside_words_and_non_ascii_text() {
        let result = find_xl("Größe: XL · Exlibris café");
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_found_tracks_count() {
        assert!(ScanResult::from_count(4).found());
        assert!(!ScanResult::from_count(0).found());
    }
}

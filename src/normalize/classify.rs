//! Title classification

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M([0-9]+)$").expect("exact title pattern"));

static WITH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M([0-9]+)\s*[-:]+(.*)$").expect("suffixed title pattern"));

/// How a title relates to the canonical `M<n>` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Already `M<n>`
    Exact,
    /// `M<n>` followed by a separator and free text
    WithSuffix,
    /// Anything else
    Other,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::WithSuffix => write!(f, "with-suffix"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Result of classifying a single title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedTitle {
    /// Canonical title carrying `number`
    Exact {
        /// Milestone number from the title
        number: u64,
    },
    /// `M<number>` plus free text
    WithSuffix {
        /// Milestone number from the title
        number: u64,
        /// Free text after the separator
        focus: String,
    },
    /// No usable number; the whole title becomes the focus text
    Other {
        /// Original title, trimmed
        focus: String,
    },
}

impl ClassifiedTitle {
    /// The classification kind
    pub const fn kind(&self) -> Classification {
        match self {
            Self::Exact { .. } => Classification::Exact,
            Self::WithSuffix { .. } => Classification::WithSuffix,
            Self::Other { .. } => Classification::Other,
        }
    }

    /// Number named by the title itself, if any
    pub const fn explicit_number(&self) -> Option<u64> {
        match self {
            Self::Exact { number } | Self::WithSuffix { number, .. } => Some(*number),
            Self::Other { .. } => None,
        }
    }
}

/// Trim and fold em/en dashes to a plain hyphen
pub fn normalize_title(title: &str) -> String {
    title.trim().replace(['\u{2014}', '\u{2013}'], "-")
}

/// Classify a milestone title
///
/// Patterns are tried in priority order: exact, with-suffix, other. A digit
/// run too large for `u64` cannot name a milestone and falls through to
/// other.
///
/// With-suffix focus text is cut from the dash-folded title, so an em dash
/// separator and one inside the text both come out as `-`. Other titles keep
/// the whole original title (trimmed) as focus text, dashes included.
pub fn classify_title(title: &str) -> ClassifiedTitle {
    let normalized = normalize_title(title);

    if let Some(caps) = EXACT.captures(&normalized)
        && let Ok(number) = caps[1].parse::<u64>()
    {
        return ClassifiedTitle::Exact { number };
    }

    if let Some(caps) = WITH_SUFFIX.captures(&normalized)
        && let Ok(number) = caps[1].parse::<u64>()
    {
        let focus = caps[2]
            .trim_start_matches(|c: char| c == '-' || c == ':' || c.is_whitespace())
            .trim_end()
            .to_string();
        return ClassifiedTitle::WithSuffix { number, focus };
    }

    ClassifiedTitle::Other {
        focus: title.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_with_surrounding_whitespace() {
        assert_eq!(classify_title("  M7 "), ClassifiedTitle::Exact { number: 7 });
    }

    #[test]
    fn test_leading_zeros_parse_numerically() {
        assert_eq!(classify_title("M007"), ClassifiedTitle::Exact { number: 7 });
    }

    #[test]
    fn test_overflowing_number_is_other() {
        let title = "M99999999999999999999999";
        assert_eq!(
            classify_title(title),
            ClassifiedTitle::Other {
                focus: title.to_string()
            }
        );
    }

    #[test]
    fn test_en_dash_separator() {
        assert_eq!(
            classify_title("M4 \u{2013} Launch"),
            ClassifiedTitle::WithSuffix {
                number: 4,
                focus: "Launch".to_string()
            }
        );
    }

    #[test]
    fn test_other_focus_keeps_original_dashes() {
        assert_eq!(
            classify_title("  Launch \u{2014} phase 2 "),
            ClassifiedTitle::Other {
                focus: "Launch \u{2014} phase 2".to_string()
            }
        );
    }

    #[test]
    fn test_suffix_focus_folds_inner_dashes() {
        assert_eq!(
            classify_title("M5 \u{2014} Launch \u{2013} phase 2"),
            ClassifiedTitle::WithSuffix {
                number: 5,
                focus: "Launch - phase 2".to_string()
            }
        );
    }
}

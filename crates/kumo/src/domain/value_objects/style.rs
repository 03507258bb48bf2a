//! Style - Comedic voices for rewriting facts

use serde::{Deserialize, Serialize};

/// Comedic tone applied when rewriting a fact.
///
/// A closed set; the fallback template table additionally keeps a `default`
/// list for requests with no style at all, which is never selectable here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Sarcastic,
    Dry,
    Punny,
    SelfDeprecating,
    Playful,
}

impl Style {
    /// Every selectable style, in a fixed order.
    pub const ALL: [Style; 5] = [
        Style::Sarcastic,
        Style::Dry,
        Style::Punny,
        Style::SelfDeprecating,
        Style::Playful,
    ];
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Sarcastic => write!(f, "sarcastic"),
            Style::Dry => write!(f, "dry"),
            Style::Punny => write!(f, "punny"),
            Style::SelfDeprecating => write!(f, "self-deprecating"),
            Style::Playful => write!(f, "playful"),
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sarcastic" => Ok(Style::Sarcastic),
            "dry" => Ok(Style::Dry),
            "punny" => Ok(Style::Punny),
            "self-deprecating" => Ok(Style::SelfDeprecating),
            "playful" => Ok(Style::Playful),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_str_round_trip() {
        for style in Style::ALL {
            let parsed: Style = style.to_string().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!("deadpan".parse::<Style>().is_err());
        assert!("default".parse::<Style>().is_err());
    }

    #[test]
    fn test_all_has_five_distinct_members() {
        let set: std::collections::HashSet<_> = Style::ALL.iter().collect();
        assert_eq!(set.len(), 5);
    }
}

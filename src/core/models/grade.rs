//! Letter grades and the fixed grade-point scale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter-grade symbol
///
/// `AP` and `AA` are separate symbols that carry the same point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    /// Advanced pass (10 points)
    AP,
    /// 10 points
    AA,
    /// 9 points
    AB,
    /// 8 points
    BB,
    /// 7 points, the default for new courses
    #[default]
    BC,
    /// 6 points
    CC,
    /// 5 points
    CD,
    /// 4 points
    DD,
    /// Fail (0 points)
    FR,
}

impl Grade {
    /// Every grade symbol, in the order a selection list shows them
    pub const ALL: [Self; 9] = [
        Self::AP,
        Self::AA,
        Self::AB,
        Self::BB,
        Self::BC,
        Self::CC,
        Self::CD,
        Self::DD,
        Self::FR,
    ];

    /// Grade points for this symbol
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::AP | Self::AA => 10,
            Self::AB => 9,
            Self::BB => 8,
            Self::BC => 7,
            Self::CC => 6,
            Self::CD => 5,
            Self::DD => 4,
            Self::FR => 0,
        }
    }

    /// The two-letter symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::AP => "AP",
            Self::AA => "AA",
            Self::AB => "AB",
            Self::BB => "BB",
            Self::BC => "BC",
            Self::CC => "CC",
            Self::CD => "CD",
            Self::DD => "DD",
            Self::FR => "FR",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|grade| grade.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|g| g.symbol()).collect();
                format!("Unknown grade '{s}' (expected one of {})", known.join(", "))
            })
    }
}

impl TryFrom<String> for Grade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.symbol().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_scale() {
        let expected = [10, 10, 9, 8, 7, 6, 5, 4, 0];
        let actual: Vec<u32> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_ap_and_aa_are_distinct_but_equal_in_points() {
        assert_ne!(Grade::AP, Grade::AA);
        assert_eq!(Grade::AP.points(), Grade::AA.points());
    }

    #[test]
    fn test_default_is_bc() {
        assert_eq!(Grade::default(), Grade::BC);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("aa".parse::<Grade>(), Ok(Grade::AA));
        assert_eq!(" Cd ".parse::<Grade>(), Ok(Grade::CD));
        assert_eq!("FR".parse::<Grade>(), Ok(Grade::FR));
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        let err = "A+".parse::<Grade>().unwrap_err();
        assert!(err.contains("A+"));
        assert!(err.contains("AP, AA"));
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_display_matches_symbol() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string(), grade.symbol());
        }
    }
}

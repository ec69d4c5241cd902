//! Letter grades and grade points
//!
//! The grading scale is a fixed table: letter grades are determined by the
//! combined assessment + final-exam score with inclusive lower bounds at
//! 90/85/80/75/70/65/60/55/50, and each letter maps to a fixed grade-point
//! value used for GPA computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter grade on the ten-step A+..F scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Determine the letter grade for a total score out of 100
    pub fn from_total(total: f64) -> Self {
        if total >= 90.0 {
            Self::APlus
        } else if total >= 85.0 {
            Self::A
        } else if total >= 80.0 {
            Self::AMinus
        } else if total >= 75.0 {
            Self::BPlus
        } else if total >= 70.0 {
            Self::B
        } else if total >= 65.0 {
            Self::BMinus
        } else if total >= 60.0 {
            Self::CPlus
        } else if total >= 55.0 {
            Self::C
        } else if total >= 50.0 {
            Self::CMinus
        } else {
            Self::F
        }
    }

    /// Grade-point value for GPA computation
    pub fn points(&self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.75,
            Self::BPlus => 3.5,
            Self::B => 3.0,
            Self::BMinus => 2.75,
            Self::CPlus => 2.5,
            Self::C => 2.0,
            Self::CMinus => 1.75,
            Self::F => 0.0,
        }
    }

    /// Parse a letter grade from its display form
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "C-" => Some(Self::CMinus),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::APlus => write!(f, "A+"),
            Self::A => write!(f, "A"),
            Self::AMinus => write!(f, "A-"),
            Self::BPlus => write!(f, "B+"),
            Self::B => write!(f, "B"),
            Self::BMinus => write!(f, "B-"),
            Self::CPlus => write!(f, "C+"),
            Self::C => write!(f, "C"),
            Self::CMinus => write!(f, "C-"),
            Self::F => write!(f, "F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(LetterGrade::from_total(90.0), LetterGrade::APlus);
        assert_eq!(LetterGrade::from_total(89.999), LetterGrade::A);
        assert_eq!(LetterGrade::from_total(85.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_total(80.0), LetterGrade::AMinus);
        assert_eq!(LetterGrade::from_total(75.0), LetterGrade::BPlus);
        assert_eq!(LetterGrade::from_total(70.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_total(65.0), LetterGrade::BMinus);
        assert_eq!(LetterGrade::from_total(60.0), LetterGrade::CPlus);
        assert_eq!(LetterGrade::from_total(55.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_total(50.0), LetterGrade::CMinus);
        assert_eq!(LetterGrade::from_total(49.999), LetterGrade::F);
        assert_eq!(LetterGrade::from_total(0.0), LetterGrade::F);
        assert_eq!(LetterGrade::from_total(100.0), LetterGrade::APlus);
    }

    #[test]
    fn test_grade_points() {
        assert_eq!(LetterGrade::APlus.points(), 4.0);
        assert_eq!(LetterGrade::A.points(), 4.0);
        assert_eq!(LetterGrade::AMinus.points(), 3.75);
        assert_eq!(LetterGrade::BPlus.points(), 3.5);
        assert_eq!(LetterGrade::B.points(), 3.0);
        assert_eq!(LetterGrade::BMinus.points(), 2.75);
        assert_eq!(LetterGrade::CPlus.points(), 2.5);
        assert_eq!(LetterGrade::C.points(), 2.0);
        assert_eq!(LetterGrade::CMinus.points(), 1.75);
        assert_eq!(LetterGrade::F.points(), 0.0);
    }

    #[test]
    fn test_parse_round_trip() {
        for grade in [
            LetterGrade::APlus,
            LetterGrade::A,
            LetterGrade::AMinus,
            LetterGrade::BPlus,
            LetterGrade::B,
            LetterGrade::BMinus,
            LetterGrade::CPlus,
            LetterGrade::C,
            LetterGrade::CMinus,
            LetterGrade::F,
        ] {
            assert_eq!(LetterGrade::parse(&grade.to_string()), Some(grade));
        }
        assert_eq!(LetterGrade::parse("D"), None);
        assert_eq!(LetterGrade::parse(""), None);
    }

    #[test]
    fn test_serialization_uses_display_form() {
        let json = serde_json::to_string(&LetterGrade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
        let back: LetterGrade = serde_json::from_str("\"B-\"").unwrap();
        assert_eq!(back, LetterGrade::BMinus);
    }
}

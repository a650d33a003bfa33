use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Letter grade assigned from a student's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "B+" => Ok(Grade::BPlus),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "F" => Ok(Grade::F),
            other => Err(LedgerError::invalid_input(format!(
                "unknown grade {other:?}"
            ))),
        }
    }
}

/// Converts an average score into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A+    |
/// | >= 80       | A     |
/// | >= 70       | B+    |
/// | >= 60       | B     |
/// | >= 50       | C     |
/// | < 50        | F     |
pub fn grade(avg: f64) -> Grade {
    match avg {
        a if a >= 90.0 => Grade::APlus,
        a if a >= 80.0 => Grade::A,
        a if a >= 70.0 => Grade::BPlus,
        a if a >= 60.0 => Grade::B,
        a if a >= 50.0 => Grade::C,
        _ => Grade::F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(100.0), Grade::APlus);
        assert_eq!(grade(90.0), Grade::APlus);
        assert_eq!(grade(89.999), Grade::A);
        assert_eq!(grade(80.0), Grade::A);
        assert_eq!(grade(79.999), Grade::BPlus);
        assert_eq!(grade(70.0), Grade::BPlus);
        assert_eq!(grade(69.999), Grade::B);
        assert_eq!(grade(60.0), Grade::B);
        assert_eq!(grade(59.999), Grade::C);
        assert_eq!(grade(50.0), Grade::C);
        assert_eq!(grade(49.999), Grade::F);
        assert_eq!(grade(0.0), Grade::F);
        assert_eq!(grade(-10.0), Grade::F);
    }

    #[test]
    fn test_grade_letters() {
        assert_eq!(grade(90.0).as_str(), "A+");
        assert_eq!(grade(75.0).to_string(), "B+");
        assert_eq!("A+".parse::<Grade>().unwrap(), Grade::APlus);
        assert_eq!(" C ".parse::<Grade>().unwrap(), Grade::C);
        assert!("D".parse::<Grade>().is_err());
    }
}

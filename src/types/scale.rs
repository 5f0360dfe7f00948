use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FOUR_POINT: [(&str, f64); 11] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D", 1.0),
    ("F", 0.0),
];

const FIVE_POINT: [(&str, f64); 7] = [
    ("A+", 5.0),
    ("A", 4.5),
    ("B", 4.0),
    ("C", 3.5),
    ("D", 3.0),
    ("E", 2.0),
    ("F", 0.0),
];

const SEVEN_POINT: [(&str, f64); 7] = [
    ("O", 7.0),
    ("A+", 6.0),
    ("A", 5.0),
    ("B+", 4.0),
    ("B", 3.0),
    ("C", 2.0),
    ("F", 0.0),
];

/// A fixed grading system: letter symbols mapped to points, capped at a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Scale {
    #[default]
    #[serde(rename = "4.0", alias = "4")]
    #[value(name = "4.0", alias = "4")]
    Four,
    #[serde(rename = "5.0", alias = "5")]
    #[value(name = "5.0", alias = "5")]
    Five,
    #[serde(rename = "7.0", alias = "7")]
    #[value(name = "7.0", alias = "7")]
    Seven,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Four, Scale::Five, Scale::Seven];

    pub fn label(self) -> &'static str {
        match self {
            Scale::Four => "4.0",
            Scale::Five => "5.0",
            Scale::Seven => "7.0",
        }
    }

    pub fn max_points(self) -> f64 {
        match self {
            Scale::Four => 4.0,
            Scale::Five => 5.0,
            Scale::Seven => 7.0,
        }
    }

    /// Grade table in display order.
    pub fn grades(self) -> &'static [(&'static str, f64)] {
        match self {
            Scale::Four => &FOUR_POINT,
            Scale::Five => &FIVE_POINT,
            Scale::Seven => &SEVEN_POINT,
        }
    }

    pub fn points(self, symbol: &str) -> Option<f64> {
        self.grades()
            .iter()
            .find(|(grade, _)| *grade == symbol)
            .map(|(_, points)| *points)
    }

    pub fn is_valid_grade(self, symbol: &str) -> bool {
        self.points(symbol).is_some()
    }

    pub fn symbols(self) -> impl Iterator<Item = &'static str> {
        self.grades().iter().map(|(grade, _)| *grade)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4.0" | "4" => Ok(Scale::Four),
            "5.0" | "5" => Ok(Scale::Five),
            "7.0" | "7" => Ok(Scale::Seven),
            other => Err(format!("unknown scale: {other} (expected 4.0, 5.0 or 7.0)")),
        }
    }
}

use crate::error::{CgpaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CREDITS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the course list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub name: String,
    pub grade: Option<String>,
    pub credits: u32,
}

impl CourseEntry {
    pub fn blank(id: CourseId, credits: u32) -> Self {
        Self {
            id,
            name: String::new(),
            grade: None,
            credits,
        }
    }

    pub fn new(id: CourseId, name: impl Into<String>, grade: Option<&str>, credits: u32) -> Self {
        Self {
            id,
            name: name.into(),
            grade: normalize_grade(grade),
            credits,
        }
    }

    /// Grade symbol if one is set.
    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    pub fn apply(&mut self, field: CourseField) {
        match field {
            CourseField::Name(name) => self.name = name,
            CourseField::Grade(grade) => self.grade = normalize_grade(grade.as_deref()),
            CourseField::Credits(credits) => self.credits = credits,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CourseField {
    Name(String),
    Grade(Option<String>),
    Credits(u32),
}

/// A course given on the command line before it is assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSpec {
    pub name: String,
    pub grade: Option<String>,
    pub credits: Option<u32>,
}

fn normalize_grade(grade: Option<&str>) -> Option<String> {
    grade
        .map(str::trim)
        .filter(|grade| !grade.is_empty())
        .map(str::to_string)
}

/// Free-text credit input; anything that is not a non-negative integer counts as zero.
pub fn parse_credits(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(0)
}

/// Parses `name:grade:credits`. Fields are split from the right, so a name
/// may contain ':' only when all three fields are given. Grade and credits
/// may be empty; a non-empty credits field must be a non-negative integer.
pub fn parse_course_spec(input: &str) -> Result<CourseSpec> {
    let mut parts = input.rsplitn(3, ':');
    let last = parts.next().unwrap_or_default();
    let (name, grade, credits) = match (parts.next(), parts.next()) {
        (Some(grade), Some(name)) => (name, grade, Some(last)),
        (Some(name), None) => (name, last, None),
        _ => {
            return Err(CgpaError::InvalidCourse(format!(
                "expected name:grade[:credits], got {input:?}"
            )))
        }
    };

    let credits = match credits.map(str::trim).filter(|credits| !credits.is_empty()) {
        Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
            CgpaError::InvalidCourse(format!(
                "credits must be a non-negative integer, got {raw:?} in {input:?} \
                 (names containing ':' need name:grade:credits)"
            ))
        })?),
        None => None,
    };

    Ok(CourseSpec {
        name: name.trim().to_string(),
        grade: normalize_grade(Some(grade)),
        credits,
    })
}

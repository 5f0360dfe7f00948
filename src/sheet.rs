use crate::calc;
use crate::error::{CgpaError, Result};
use crate::predict::{self, Prediction};
use crate::types::course::{parse_credits, CourseEntry, CourseField, CourseId, CourseSpec};
use crate::types::scale::Scale;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Course sheet as read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetFile {
    pub scale: Option<Scale>,
    pub target: Option<SheetTarget>,
    #[serde(default)]
    pub courses: Vec<SheetCourse>,
}

/// Targets may be written as a TOML number or as free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SheetTarget {
    Number(f64),
    Text(String),
}

impl SheetTarget {
    pub fn as_input(&self) -> String {
        match self {
            SheetTarget::Number(value) => value.to_string(),
            SheetTarget::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetCourse {
    #[serde(default)]
    pub name: String,
    pub grade: Option<String>,
    pub credits: Option<SheetCredits>,
}

/// Credit weights are taken as loosely as the form's numeric field: anything
/// that is not a non-negative integer becomes 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SheetCredits {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SheetCredits {
    pub fn value(&self) -> u32 {
        match self {
            SheetCredits::Integer(credits) => u32::try_from(*credits).unwrap_or(0),
            SheetCredits::Float(credits) => parse_credits(&credits.to_string()),
            SheetCredits::Text(credits) => parse_credits(credits),
        }
    }
}

impl SheetFile {
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CgpaError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CgpaError::SheetParse(format!("{}: {}", path.display(), e)))
    }
}

/// In-memory form state: the course list plus the latest results.
/// Nothing here is ever written back to disk.
#[derive(Debug, Clone)]
pub struct CourseSheet {
    scale: Scale,
    default_credits: u32,
    courses: Vec<CourseEntry>,
    next_id: u64,
    target: String,
    current_average: Option<f64>,
    prediction: Option<Prediction>,
}

impl CourseSheet {
    /// A fresh sheet holds a single blank course, like the empty form.
    pub fn new(scale: Scale, default_credits: u32) -> Self {
        let mut sheet = Self::empty(scale, default_credits);
        sheet.add_course();
        sheet
    }

    pub fn empty(scale: Scale, default_credits: u32) -> Self {
        Self {
            scale,
            default_credits,
            courses: Vec::new(),
            next_id: 1,
            target: String::new(),
            current_average: None,
            prediction: None,
        }
    }

    pub fn from_file(file: SheetFile, scale: Scale, default_credits: u32) -> Self {
        let mut sheet = Self::empty(file.scale.unwrap_or(scale), default_credits);
        if let Some(target) = file.target {
            sheet.set_target(&target.as_input());
        }
        for course in file.courses {
            sheet.push_spec(CourseSpec {
                name: course.name,
                grade: course.grade,
                credits: course.credits.as_ref().map(SheetCredits::value),
            });
        }
        sheet
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn current_average(&self) -> Option<f64> {
        self.current_average
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    fn allocate_id(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_course(&mut self) -> CourseId {
        let id = self.allocate_id();
        self.courses
            .push(CourseEntry::blank(id, self.default_credits));
        debug!(course = %id, "added course");
        id
    }

    pub fn push_spec(&mut self, spec: CourseSpec) -> CourseId {
        let id = self.allocate_id();
        let credits = spec.credits.unwrap_or(self.default_credits);
        self.courses
            .push(CourseEntry::new(id, spec.name, spec.grade.as_deref(), credits));
        id
    }

    pub fn remove_course(&mut self, id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| course.id != id);
        let removed = self.courses.len() != before;
        debug!(course = %id, removed, "remove course");
        removed
    }

    pub fn update_course(&mut self, id: CourseId, field: CourseField) -> bool {
        match self.courses.iter_mut().find(|course| course.id == id) {
            Some(course) => {
                course.apply(field);
                true
            }
            None => false,
        }
    }

    /// Switches the active scale. Existing grade symbols are left as entered,
    /// even when the new scale does not know them.
    pub fn set_scale(&mut self, scale: Scale) {
        info!(from = %self.scale, to = %scale, "scale changed");
        self.scale = scale;
    }

    pub fn set_target(&mut self, target: &str) {
        self.target = target.to_string();
    }

    /// Recomputes the average. On "no result" the previously shown average stays.
    pub fn calculate(&mut self) -> Option<f64> {
        let average = calc::average(self.scale, &self.courses)?;
        self.current_average = Some(average);
        Some(average)
    }

    /// Recomputes the average, then replaces the stored prediction. A missing
    /// target or an undefined average leaves the previous prediction in place.
    pub fn predict(&mut self) -> Option<&Prediction> {
        self.calculate()?;
        let prediction = predict::predict(self.scale, &self.courses, &self.target)?;
        self.prediction = Some(prediction);
        self.prediction.as_ref()
    }
}

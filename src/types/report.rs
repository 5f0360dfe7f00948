use crate::calc;
use crate::predict::{self, difficulty::difficulty_for, Prediction};
use crate::sheet::CourseSheet;
use crate::types::course::CourseId;
use crate::types::scale::Scale;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CourseLine {
    pub id: CourseId,
    pub name: String,
    pub grade: Option<String>,
    pub credits: u32,
    pub grade_points: Option<f64>,
    pub difficulty: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GpaReport {
    pub scale: Scale,
    pub max_points: f64,
    pub courses: Vec<CourseLine>,
    pub total_credits: u32,
    pub average: Option<f64>,
    pub performance_score: Option<f64>,
    pub target: Option<f64>,
    pub prediction: Option<Prediction>,
}

impl GpaReport {
    pub fn from_sheet(sheet: &CourseSheet) -> Self {
        let scale = sheet.scale();
        let courses = sheet
            .courses()
            .iter()
            .map(|course| CourseLine {
                id: course.id,
                name: course.name.clone(),
                grade: course.grade.clone(),
                credits: course.credits,
                grade_points: course.grade().and_then(|grade| scale.points(grade)),
                difficulty: difficulty_for(&course.name),
            })
            .collect();

        Self {
            scale,
            max_points: scale.max_points(),
            courses,
            total_credits: calc::total_credits(scale, sheet.courses()),
            average: sheet.current_average(),
            performance_score: predict::performance_score(scale, sheet.courses()),
            target: predict::parse_target(sheet.target()),
            prediction: sheet.prediction().cloned(),
        }
    }
}

pub mod difficulty;

use crate::calc::{self, round2};
use crate::types::course::CourseEntry;
use crate::types::scale::Scale;
use difficulty::{difficulty_for, DEFAULT_DIFFICULTY};
use serde::Serialize;
use tracing::debug;

const CURRENT_WEIGHT: f64 = 0.7;
const PERFORMANCE_WEIGHT: f64 = 0.3;
const TARGET_TOLERANCE: f64 = 0.5;
const MIN_GRADED_FOR_ACCURACY: usize = 4;

pub const BALANCE_RECOMMENDATION: &str = "Consider balancing difficult courses across semesters";
pub const MORE_COURSES_RECOMMENDATION: &str = "Take more courses to improve prediction accuracy";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub predicted_average: f64,
    pub recommendations: Vec<String>,
    pub target_achievable: bool,
}

/// A course paired with its inferred difficulty and resolved grade points.
#[derive(Debug, Clone, Copy)]
struct CoursePattern {
    difficulty: f64,
    points: Option<f64>,
}

fn patterns(scale: Scale, courses: &[CourseEntry]) -> Vec<CoursePattern> {
    courses
        .iter()
        .map(|course| CoursePattern {
            difficulty: difficulty_for(&course.name),
            points: course.grade().and_then(|grade| scale.points(grade)),
        })
        .collect()
}

/// Parses the free-text target. Empty, non-numeric and non-finite input yield `None`.
pub fn parse_target(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|target| target.is_finite())
}

fn mean_performance(scale: Scale, patterns: &[CoursePattern]) -> Option<f64> {
    let scores: Vec<f64> = patterns
        .iter()
        .filter_map(|pattern| {
            pattern
                .points
                .map(|points| points / scale.max_points() * pattern.difficulty)
        })
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Mean of `(points / max) * difficulty` over graded entries, credits ignored.
/// `None` when nothing is graded.
pub fn performance_score(scale: Scale, courses: &[CourseEntry]) -> Option<f64> {
    mean_performance(scale, &patterns(scale, courses))
}

/// Inclusive half-point tolerance below the target.
pub fn is_target_achievable(predicted: f64, target: f64) -> bool {
    predicted >= target - TARGET_TOLERANCE
}

pub fn difficulty_threshold(scale: Scale, target: f64) -> f64 {
    target / scale.max_points() * DEFAULT_DIFFICULTY
}

fn recommendations(
    scale: Scale,
    patterns: &[CoursePattern],
    predicted: f64,
    target: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if predicted >= target {
        return recommendations;
    }

    if patterns
        .iter()
        .any(|pattern| pattern.difficulty > DEFAULT_DIFFICULTY)
    {
        recommendations.push(BALANCE_RECOMMENDATION.to_string());
    }
    let graded = patterns
        .iter()
        .filter(|pattern| pattern.points.is_some())
        .count();
    if graded < MIN_GRADED_FOR_ACCURACY {
        recommendations.push(MORE_COURSES_RECOMMENDATION.to_string());
    }
    recommendations.push(format!(
        "Focus on courses with difficulty level {:.2} or lower",
        difficulty_threshold(scale, target)
    ));
    recommendations
}

/// Blends an already computed average with the difficulty-adjusted
/// performance score.
pub fn predict_from_average(
    current_average: f64,
    scale: Scale,
    courses: &[CourseEntry],
    target: f64,
) -> Option<Prediction> {
    let patterns = patterns(scale, courses);
    let performance = mean_performance(scale, &patterns)?;
    let predicted_average =
        round2(current_average * CURRENT_WEIGHT + performance * PERFORMANCE_WEIGHT);
    let target_achievable = is_target_achievable(predicted_average, target);
    debug!(
        current_average,
        performance,
        predicted_average,
        goal = target,
        target_achievable,
        "computed prediction"
    );

    Some(Prediction {
        predicted_average,
        recommendations: recommendations(scale, &patterns, predicted_average, target),
        target_achievable,
    })
}

/// Computes the current average and then the prediction. `None` when the
/// target is missing or unparseable, or when no average can be computed.
pub fn predict(scale: Scale, courses: &[CourseEntry], target: &str) -> Option<Prediction> {
    let Some(target) = parse_target(target) else {
        debug!(input = target, "target missing or not a finite number");
        return None;
    };
    let current = calc::average(scale, courses)?;
    predict_from_average(current, scale, courses, target)
}

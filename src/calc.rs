use crate::types::course::CourseEntry;
use crate::types::scale::Scale;
use tracing::{debug, warn};

/// Rounds to two decimal places on the exact decimal expansion of `value`.
/// Exact half-cent ties can only occur at odd multiples of 1/8; those round
/// away from zero.
pub fn round2(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Graded, credited entries with their grade points on `scale`.
fn weighted_points<'a>(
    scale: Scale,
    courses: &'a [CourseEntry],
) -> impl Iterator<Item = (f64, u32)> + 'a {
    courses
        .iter()
        .filter(|course| course.credits > 0)
        .filter_map(move |course| {
            let grade = course.grade()?;
            match scale.points(grade) {
                Some(points) => Some((points, course.credits)),
                None => {
                    warn!(
                        course = %course.id,
                        grade,
                        scale = %scale,
                        "grade is not on the active scale; skipping"
                    );
                    None
                }
            }
        })
}

pub fn total_credits(scale: Scale, courses: &[CourseEntry]) -> u32 {
    weighted_points(scale, courses)
        .map(|(_, credits)| credits)
        .sum()
}

/// Credit-weighted mean of grade points, rounded to two decimals. `None` when
/// no entry has both a grade and a positive credit weight.
pub fn average(scale: Scale, courses: &[CourseEntry]) -> Option<f64> {
    let (total_points, total_credits) = weighted_points(scale, courses).fold(
        (0.0_f64, 0_u64),
        |(points_acc, credits_acc), (points, credits)| {
            (
                points_acc + points * f64::from(credits),
                credits_acc + u64::from(credits),
            )
        },
    );

    if total_credits == 0 {
        debug!(scale = %scale, "no graded courses with credits; average undefined");
        return None;
    }

    let average = round2(total_points / total_credits as f64);
    debug!(scale = %scale, total_points, total_credits, average, "computed average");
    Some(average)
}

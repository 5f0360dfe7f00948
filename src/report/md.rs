use crate::types::report::GpaReport;

pub const ACHIEVABLE_MESSAGE: &str = "Your target CGPA appears achievable!";
pub const CHALLENGING_MESSAGE: &str = "Reaching your target CGPA may be challenging";

fn format_points(value: f64) -> String {
    format!("{value:.2}")
}

pub fn to_markdown(report: &GpaReport) -> String {
    let mut output = String::new();
    output.push_str("# CGPA Report\n\n");
    output.push_str(&format!("Scale: {}\n\n", report.scale));

    output.push_str("## Courses\n\n");
    if report.courses.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| id | course | grade | credits | points |\n");
        output.push_str("|----|--------|-------|---------|--------|\n");
        for course in &report.courses {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                course.id,
                if course.name.is_empty() {
                    "-"
                } else {
                    course.name.as_str()
                },
                course.grade.as_deref().unwrap_or("-"),
                course.credits,
                course
                    .grade_points
                    .map(format_points)
                    .unwrap_or_else(|| "-".to_string()),
            ));
        }
        output.push('\n');
    }

    output.push_str("## Current CGPA\n\n");
    match report.average {
        Some(average) => output.push_str(&format!(
            "{} / {:.1} over {} credits\n",
            format_points(average),
            report.max_points,
            report.total_credits
        )),
        None => output.push_str("- undefined (no graded courses with credits)\n"),
    }

    if let Some(prediction) = &report.prediction {
        output.push_str("\n## Predictions\n\n");
        output.push_str(&format!(
            "Predicted CGPA: {}\n",
            format_points(prediction.predicted_average)
        ));
        if let Some(performance) = report.performance_score {
            output.push_str(&format!("Performance score: {performance:.3}\n"));
        }
        if let Some(target) = report.target {
            output.push_str(&format!("Target CGPA: {}\n", format_points(target)));
        }
        output.push_str("\n### Target Analysis\n\n");
        output.push_str(if prediction.target_achievable {
            ACHIEVABLE_MESSAGE
        } else {
            CHALLENGING_MESSAGE
        });
        output.push('\n');

        if !prediction.recommendations.is_empty() {
            output.push_str("\n### Recommendations\n\n");
            for recommendation in &prediction.recommendations {
                output.push_str(&format!("- {recommendation}\n"));
            }
        }
    }

    output
}

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::grading::GradeCalculationResult;

/// A calculated grade ready for display.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub student: &'a str,
    pub result: &'a GradeCalculationResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a grade with exactly two decimals (16.8 -> "16.80")
pub fn format_grade(value: f64) -> String {
    format!("{:.2}", value)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Format a report as the multi-line text block shown after a calculation
pub fn format_report(report: &Report<'_>, use_colors: bool) -> String {
    let result = report.result;
    let final_grade = format_grade(result.final_grade);

    if use_colors {
        let attendance = if result.attendance_satisfied {
            yes_no(true).green().to_string()
        } else {
            yes_no(false).red().to_string()
        };
        let approved = if result.extra_policy_approved {
            yes_no(true).green().to_string()
        } else {
            yes_no(false).red().to_string()
        };
        format!(
            "{}\nStudent: {}\nWeighted average: {}\nMinimum attendance met: {}\nTeachers approved extra points: {}\nExtra points applied: {}\nFinal grade: {}",
            "=== Result ===".bold(),
            report.student.cyan(),
            format_grade(result.weighted_average),
            attendance,
            approved,
            format_grade(result.extra_points_applied).yellow(),
            final_grade.bold()
        )
    } else {
        format!(
            "=== Result ===\nStudent: {}\nWeighted average: {}\nMinimum attendance met: {}\nTeachers approved extra points: {}\nExtra points applied: {}\nFinal grade: {}",
            report.student,
            format_grade(result.weighted_average),
            yes_no(result.attendance_satisfied),
            yes_no(result.extra_policy_approved),
            format_grade(result.extra_points_applied),
            final_grade
        )
    }
}

/// Format a report as pretty-printed JSON
pub fn format_json(report: &Report<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

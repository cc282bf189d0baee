use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use super::prompt::Prompter;
use crate::grading::calculator::{total_weight, validate_evaluations, MAX_EVALUATIONS, TOTAL_WEIGHT};
use crate::grading::evaluation::{SCORE_MAX, SCORE_MIN, WEIGHT_MAX, WEIGHT_MIN};
use crate::grading::extra_points::{MAX_EXTRA_POINTS, MAX_YEARLY_APPROVALS};
use crate::grading::{Evaluation, GradeCalculationRequest};
use crate::request::Submission;

/// Ask for everything needed to grade one student.
///
/// A weight total other than 100 ends the session with a
/// [`ValidationError`](crate::grading::ValidationError) as soon as the last
/// evaluation is entered.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_extra_points: Option<f64>,
) -> Result<Submission> {
    prompter.say("")?;
    prompter.say("=== Grade Calculator ===")?;

    let student_code = prompter.ask_non_empty("Student code: ", "Student code")?;

    let count = prompter.ask_count("Number of evaluations", 1, MAX_EVALUATIONS)?;
    let mut evaluations: Vec<Evaluation> = Vec::with_capacity(count);

    for i in 0..count {
        prompter.say("")?;
        prompter.say(format!("Evaluation {}", i + 1))?;
        let name = prompter.ask_non_empty("  Name: ", "Name")?;
        let score = prompter.ask_number(
            &format!("  Score ({}-{})", SCORE_MIN, SCORE_MAX),
            SCORE_MIN,
            SCORE_MAX,
            None,
        )?;
        let weight = prompter.ask_number(
            &format!("  Weight % (remaining {})", remaining_weight(&evaluations)),
            WEIGHT_MIN,
            WEIGHT_MAX,
            None,
        )?;
        evaluations.push(Evaluation::new(&name, score, weight)?);
    }

    validate_evaluations(&evaluations)?;
    info!(evaluations = evaluations.len(), "evaluations entered");

    prompter.say("")?;
    let has_reached_min_classes =
        prompter.ask_yes_no("Did the student meet minimum attendance?", None)?;

    let years = prompter.ask_count("Number of yearly teacher decisions", 1, MAX_YEARLY_APPROVALS)?;
    let mut all_years_teachers = Vec::with_capacity(years);
    for year in 1..=years {
        let approved = prompter.ask_yes_no(
            &format!("Did the year {} teachers approve extra points?", year),
            None,
        )?;
        all_years_teachers.push(approved);
    }

    let extra_points = prompter.ask_number(
        &format!("Extra points when they apply (0-{})", MAX_EXTRA_POINTS),
        0.0,
        MAX_EXTRA_POINTS,
        default_extra_points,
    )?;

    Ok(Submission {
        student_code,
        request: GradeCalculationRequest {
            evaluations,
            has_reached_min_classes,
            all_years_teachers,
        },
        extra_points: Some(extra_points),
    })
}

/// Weight still unassigned, formatted for the prompt (e.g. "60.00%").
pub fn remaining_weight(evaluations: &[Evaluation]) -> String {
    let remaining = (TOTAL_WEIGHT - total_weight(evaluations)).max(0.0);
    format!("{:.2}%", remaining)
}

//! Line-oriented editing loop over a [`CourseSheet`].
//!
//! Each input line is one form action. Results print immediately and the
//! sheet is discarded when the input ends.

use crate::error::{CgpaError, Result};
use crate::report::md::{ACHIEVABLE_MESSAGE, CHALLENGING_MESSAGE};
use crate::sheet::CourseSheet;
use crate::types::course::{parse_credits, CourseField, CourseId};
use crate::types::scale::Scale;
use std::io::{BufRead, Write};

const HELP: &str = "commands:
  add                      add a blank course
  remove <id>              remove a course
  name <id> <text>         set course name
  grade <id> <symbol|->    set or clear the grade
  credits <id> <n>         set credit weight
  scale <4.0|5.0|7.0>      switch grading scale
  target <value>           set target CGPA
  list                     show courses
  grades                   show grade symbols for the active scale
  calc                     compute current CGPA
  predict                  predict CGPA against the target
  quit                     end the session";

enum Flow {
    Continue,
    Quit,
}

pub fn run<R: BufRead, W: Write>(sheet: &mut CourseSheet, input: R, output: &mut W) -> Result<()> {
    writeln!(output, "cgpa session ({} scale); type 'help' for commands", sheet.scale())?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match execute(sheet, line, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CgpaError::InvalidCourse(message) | CgpaError::InvalidCommand(message)) => {
                writeln!(output, "error: {message}")?
            }
            Err(other) => return Err(other),
        }
    }
    Ok(())
}

fn parse_id(raw: Option<&str>) -> Result<CourseId> {
    raw.and_then(|raw| raw.parse::<u64>().ok())
        .map(CourseId)
        .ok_or_else(|| CgpaError::InvalidCommand("expected a numeric course id".to_string()))
}

fn update<W: Write>(
    sheet: &mut CourseSheet,
    id: CourseId,
    field: CourseField,
    output: &mut W,
) -> Result<()> {
    if sheet.update_course(id, field) {
        writeln!(output, "updated course {id}")?;
        Ok(())
    } else {
        Err(CgpaError::InvalidCourse(format!("no course with id {id}")))
    }
}

fn execute<W: Write>(sheet: &mut CourseSheet, line: &str, output: &mut W) -> Result<Flow> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let (arg, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let arg = Some(arg).filter(|arg| !arg.is_empty());
    let tail = tail.trim();

    match command {
        "add" => {
            let id = sheet.add_course();
            writeln!(output, "added course {id}")?;
        }
        "remove" => {
            let id = parse_id(arg)?;
            if !sheet.remove_course(id) {
                return Err(CgpaError::InvalidCourse(format!("no course with id {id}")));
            }
            writeln!(output, "removed course {id}")?;
        }
        "name" => {
            let id = parse_id(arg)?;
            update(sheet, id, CourseField::Name(tail.to_string()), output)?;
        }
        "grade" => {
            let id = parse_id(arg)?;
            let grade = match tail {
                "" | "-" => None,
                symbol if sheet.scale().is_valid_grade(symbol) => Some(symbol.to_string()),
                symbol => {
                    return Err(CgpaError::InvalidCourse(format!(
                        "grade {symbol} is not on the {} scale (valid: {})",
                        sheet.scale(),
                        sheet.scale().symbols().collect::<Vec<_>>().join(" ")
                    )))
                }
            };
            update(sheet, id, CourseField::Grade(grade), output)?;
        }
        "credits" => {
            let id = parse_id(arg)?;
            update(sheet, id, CourseField::Credits(parse_credits(tail)), output)?;
        }
        "scale" => {
            let scale = rest.parse::<Scale>().map_err(CgpaError::InvalidCommand)?;
            sheet.set_scale(scale);
            writeln!(output, "scale set to {scale}")?;
        }
        "target" => {
            sheet.set_target(rest);
            writeln!(output, "target set to {rest:?}")?;
        }
        "list" => write_courses(sheet, output)?,
        "grades" => {
            for (symbol, points) in sheet.scale().grades() {
                writeln!(output, "{symbol:<3} {points:.1}")?;
            }
        }
        "calc" => match sheet.calculate() {
            Some(average) => writeln!(output, "current CGPA: {average:.2}")?,
            None => writeln!(output, "current CGPA: undefined")?,
        },
        "predict" => match sheet.predict() {
            Some(prediction) => {
                writeln!(output, "predicted CGPA: {:.2}", prediction.predicted_average)?;
                writeln!(
                    output,
                    "{}",
                    if prediction.target_achievable {
                        ACHIEVABLE_MESSAGE
                    } else {
                        CHALLENGING_MESSAGE
                    }
                )?;
                for recommendation in &prediction.recommendations {
                    writeln!(output, "- {recommendation}")?;
                }
            }
            None => writeln!(output, "prediction: unavailable (needs a target and graded courses)")?,
        },
        "help" => writeln!(output, "{HELP}")?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            return Err(CgpaError::InvalidCommand(format!(
                "unknown command: {other} (try 'help')"
            )))
        }
    }
    Ok(Flow::Continue)
}

fn write_courses<W: Write>(sheet: &CourseSheet, output: &mut W) -> Result<()> {
    if sheet.courses().is_empty() {
        writeln!(output, "no courses")?;
        return Ok(());
    }
    for course in sheet.courses() {
        writeln!(
            output,
            "{}: {} [{}] x{}",
            course.id,
            if course.name.is_empty() {
                "(unnamed)"
            } else {
                course.name.as_str()
            },
            course.grade().unwrap_or("-"),
            course.credits
        )?;
    }
    Ok(())
}

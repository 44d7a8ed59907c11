use std::io::Write;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::counting::TraceLine;
use crate::speaker::{Pet, Speaker};

/// Everything one greeter run produced
#[derive(Debug, Clone, Serialize)]
pub struct GreeterReport {
    pub greetings: Vec<String>,
    pub trace: Vec<TraceLine>,
}

impl GreeterReport {
    pub fn new(speakers: &[Pet], trace: Vec<TraceLine>) -> Self {
        GreeterReport {
            greetings: speakers.iter().map(|s| s.greeting()).collect(),
            trace,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SumReport {
    pub numbers: Vec<i64>,
    pub result: i64,
}

/// Turn colors on only for terminals, unless explicitly disabled
pub fn configure_color(stdout_is_terminal: bool, no_color: bool) {
    if no_color || !stdout_is_terminal {
        colored::control::set_override(false);
    }
}

// Output a report as pretty JSON
pub fn output_json<T: Serialize>(out: &mut dyn Write, report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// Greetings first, then the loop trace, one per line
pub fn output_greeter_text(out: &mut dyn Write, report: &GreeterReport) -> Result<()> {
    for greeting in &report.greetings {
        writeln!(out, "{}", greeting.bold())?;
    }
    for line in &report.trace {
        match line {
            TraceLine::Count(_) => writeln!(out, "{}", line)?,
            TraceLine::Skipped => writeln!(out, "{}", line.to_string().yellow())?,
        }
    }
    Ok(())
}

pub fn output_sum_text(out: &mut dyn Write, report: &SumReport) -> Result<()> {
    writeln!(out, "Result {}", report.result.to_string().green().bold())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::{run, LoopConfig};
    use crate::speaker::default_pets;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn greeter_text_without_greetings() {
        let report = GreeterReport::new(&[], run(&LoopConfig::default()));
        let text = render(|out| output_greeter_text(out, &report));
        assert_eq!(text, "1\n2\nSkipped part of the loop\n");
    }

    #[test]
    fn greeter_text_with_greetings() {
        let report = GreeterReport::new(&default_pets(), run(&LoopConfig::default()));
        let text = render(|out| output_greeter_text(out, &report));
        assert_eq!(
            text,
            "Rex says Woof!\nTom says Meow!\n1\n2\nSkipped part of the loop\n"
        );
    }

    #[test]
    fn sum_text_has_result_label() {
        let report = SumReport {
            numbers: vec![1, 2, 3],
            result: 6,
        };
        let text = render(|out| output_sum_text(out, &report));
        assert_eq!(text, "Result 6\n");
    }

    #[test]
    fn sum_json_carries_numbers_and_result() {
        let report = SumReport {
            numbers: vec![4, 5],
            result: 9,
        };
        let text = render(|out| output_json(out, &report));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["result"], 9);
        assert_eq!(value["numbers"], serde_json::json!([4, 5]));
    }
}

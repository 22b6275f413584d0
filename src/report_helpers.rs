use serde::Serialize;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a score cell: entered scores as digits, unscored as a dash.
pub fn score_cell(score: Option<u8>) -> String {
    match score {
        Some(v) => v.to_string(),
        None => "\u{2013}".to_string(),
    }
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;

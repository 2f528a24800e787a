//! Plain text output formatting.
//!
//! Produces human-readable result cards with colors and formatting.

use crate::store::ResultStore;
use crate::types::{ResultRecord, Roll};
use console::{style, Style};
use std::io::{self, Write};

/// Print a result card for a found record.
pub fn print_result(roll: &Roll, record: &ResultRecord) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let status_text = match record {
        ResultRecord::Passed { gpa } => format!("Passed • GPA {}", gpa),
        ResultRecord::Referred { .. } => "Referred".to_string(),
    };
    let status_style = if record.is_passed() {
        Style::new().green().bold()
    } else {
        Style::new().yellow().bold()
    };

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════").cyan()
    )?;
    writeln!(
        out,
        "  {} {}    {}",
        style("Roll:").bold(),
        roll,
        status_style.apply_to(status_text)
    )?;
    writeln!(
        out,
        "  {}",
        style("───────────────────────────────────────────────").dim()
    )?;

    match record {
        ResultRecord::Passed { gpa } => {
            writeln!(out, "  {:<10} Passed", style("Status").bold())?;
            writeln!(out, "  {:<10} {}", style("GPA").bold(), gpa)?;
        }
        ResultRecord::Referred { subjects } => {
            writeln!(out, "  {:<10} Referred", style("Status").bold())?;
            writeln!(
                out,
                "  {:<10} {}",
                style("Subjects").bold(),
                subjects.join(", ")
            )?;
        }
    }

    writeln!(
        out,
        "{}",
        style("═══════════════════════════════════════════════").cyan()
    )?;
    writeln!(out)?;

    Ok(())
}

/// Print a card for a roll with no result in the dataset.
pub fn print_not_found(roll: &Roll) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(out, "  {}", style("No result found").bold())?;
    writeln!(
        out,
        "  {}",
        style(format!("Roll {} is not present in the dataset", roll)).dim()
    )?;
    writeln!(out)?;

    Ok(())
}

/// Print a dataset listing as a table.
pub fn print_listing<'a>(
    entries: impl Iterator<Item = (&'a Roll, &'a ResultRecord)>,
    store: &ResultStore,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(out, "  {} {}", style("Dataset:").bold(), store.summary())?;
    if let Some(fetched_at) = store.fetched_at() {
        writeln!(
            out,
            "  {} {}",
            style("Fetched:").bold(),
            style(fetched_at.to_rfc3339()).dim()
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "  {:<18}  {:^10}  {}",
        style("ROLL").bold(),
        style("STATUS").bold(),
        style("DETAIL").bold()
    )?;
    writeln!(
        out,
        "  {}",
        style("───────────────────────────────────────────────").dim()
    )?;

    for (roll, record) in entries {
        let status_style = if record.is_passed() {
            Style::new().green()
        } else {
            Style::new().yellow()
        };
        let detail = match record {
            ResultRecord::Passed { gpa } => format!("GPA {}", gpa),
            ResultRecord::Referred { subjects } => subjects.join(", "),
        };

        writeln!(
            out,
            "  {:<18}  {:^10}  {}",
            roll,
            status_style.apply_to(record.status().to_string()),
            detail
        )?;
    }

    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

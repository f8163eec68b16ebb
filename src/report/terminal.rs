use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AnalysisResult, Findings, RiskLabel};

/// Render a colored terminal report.
pub fn render(result: &AnalysisResult, findings: &Findings, source: &str, quiet: bool) -> Result<()> {
    if quiet {
        println!("Score: {}  Label: {}", result.score, paint(result.label));
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "privacy-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Analyzing: {}\n", source);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Score : {:>3} / 100", result.score));
    println!(" │  {:<48} │", format!("Label : {}", paint(result.label)));
    println!(" └────────────────────────────────────────────────────┘\n");

    if result.label == RiskLabel::NoContent {
        println!(" {} Nothing to analyze.\n", "[INFO]".dimmed().bold());
        return Ok(());
    }

    println!("{}", breakdown_table(findings));
    println!();

    for bullet in &result.bullets {
        println!("  • {}", bullet);
    }
    println!();

    Ok(())
}

fn breakdown_table(findings: &Findings) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Signal").add_attribute(Attribute::Bold),
            Cell::new("Detected").add_attribute(Attribute::Bold),
            Cell::new("Points").add_attribute(Attribute::Bold),
        ]);

    let rows = [
        (
            "Third-party disclosure",
            format!("{} hits", findings.third_party_hits),
            findings.third_party_points,
        ),
        (
            "Sensitive data",
            flag(findings.sensitive),
            findings.sensitive_points,
        ),
        (
            "Marketing use",
            flag(findings.marketing),
            findings.marketing_points,
        ),
        (
            "Data categories",
            findings.data_categories.to_string(),
            findings.data_category_points,
        ),
        (
            "Retention",
            findings.retention.to_string(),
            findings.retention_points,
        ),
        (
            "Opt-out / withdrawal",
            flag(findings.opt_out),
            findings.opt_out_points,
        ),
        (
            "Anonymization",
            flag(findings.anonymized),
            findings.anonymization_points,
        ),
        (
            "Short text",
            flag(findings.short_text),
            findings.short_text_points,
        ),
    ];

    for (signal, detected, points) in rows {
        let color = match points {
            p if p > 0 => Color::Red,
            p if p < 0 => Color::Green,
            _ => Color::DarkGrey,
        };
        table.add_row(vec![
            Cell::new(signal),
            Cell::new(detected),
            Cell::new(format!("{:+}", points))
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

fn flag(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn paint(label: RiskLabel) -> ColoredString {
    let text = label.to_string();
    let text = text.as_str();
    match label {
        RiskLabel::NoContent => text.dimmed(),
        RiskLabel::Good => text.green(),
        RiskLabel::Low => text.cyan(),
        RiskLabel::Caution => text.yellow(),
        RiskLabel::Danger => text.red().bold(),
    }
}

//! Interactive CLI mode for the report renderer

use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fs;
use std::path::PathBuf;

use crate::utils::default_report_filename;
use crate::{generate_report, ReportOptions, Severity};

/// Scan the current directory for context documents
fn find_nearby_contexts() -> Vec<PathBuf> {
    let mut contexts = Vec::new();

    if let Ok(entries) = fs::read_dir(".") {
        for entry in entries.flatten() {
            let path = entry.path();
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("json") || e.eq_ignore_ascii_case("json5"))
                .unwrap_or(false);
            if is_json {
                contexts.push(path);
            }
        }
    }

    contexts.sort();
    contexts
}

/// Prompt user to select a context document path
fn prompt_for_context_path(prompt_text: &str) -> Result<PathBuf> {
    let nearby = find_nearby_contexts();

    if nearby.is_empty() {
        let input_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt_text)
            .with_initial_text("./")
            .interact_text()?;
        return Ok(PathBuf::from(input_path));
    }

    let mut options: Vec<String> = nearby
        .iter()
        .map(|p| format!("📄 {} (detected)", p.display()))
        .collect();
    options.push("✏️  Enter custom path".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt_text)
        .items(&options)
        .default(0)
        .interact()?;

    if selection < nearby.len() {
        Ok(nearby[selection].clone())
    } else {
        let input_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter context document path")
            .with_initial_text("./")
            .interact_text()?;
        Ok(PathBuf::from(input_path))
    }
}

/// Run the interactive CLI mode
pub fn run_interactive_mode() -> Result<()> {
    println!("{}", "Schedule Change Report Renderer".bold().blue());
    println!("{}", "=".repeat(50).blue());

    loop {
        println!();
        let options = vec![
            "📄 Render a report",
            "🔍 Check a context document",
            "❌ Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => handle_render()?,
            1 => handle_check()?,
            2 => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn handle_render() -> Result<()> {
    let input = prompt_for_context_path("📄 Select context document to render")?;

    if !input.exists() {
        println!("{}", "❌ Error: Input path does not exist!".red().bold());
        return Ok(());
    }

    let strict = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("🔧 Strict mode? (refuse payloads with major findings)")
        .default(false)
        .interact()?;

    let outcome = match generate_report(&input, ReportOptions { strict }) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{}", format!("❌ Rendering failed: {}", e).red().bold());
            return Ok(());
        }
    };

    let output_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("📂 Output file")
        .with_initial_text(default_report_filename(&outcome.context))
        .interact_text()?;
    let output = PathBuf::from(output_path);

    if output.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", "Skipped.".yellow());
            return Ok(());
        }
    }

    fs::write(&output, &outcome.html)?;
    println!(
        "{}",
        format!("✅ Report written to {}", output.display())
            .green()
            .bold()
    );
    print_findings(&outcome.findings);
    Ok(())
}

fn handle_check() -> Result<()> {
    let input = prompt_for_context_path("🔍 Select context document to check")?;

    match crate::parser::load_context(&input) {
        Ok(context) => {
            let findings = crate::analyzer::analyze_context(&context);
            if findings.is_empty() {
                println!("{}", "✅ No findings.".green());
            } else {
                print_findings(&findings);
            }
        }
        Err(e) => println!("{}", format!("❌ Invalid context: {}", e).red().bold()),
    }
    Ok(())
}

fn print_findings(findings: &[crate::Finding]) {
    for finding in findings {
        let severity = match finding.severity {
            Severity::Major => finding.severity.to_string().red().bold(),
            Severity::Minor => finding.severity.to_string().yellow(),
            Severity::Info => finding.severity.to_string().blue(),
        };
        println!("{} [{}] {}", severity, finding.location, finding.message);
        if let Some(suggestion) = &finding.suggestion {
            println!("  💡 {}", suggestion.dimmed());
        }
    }
}

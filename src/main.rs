//! Schedule change report renderer CLI

use clap::{Parser, Subcommand};
use colored::*;
use plan2html::utils::default_report_filename;
use plan2html::{generate_report, ReportOptions, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plan2html")]
#[command(about = "Render lesson-plan change summaries as HTML reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a context document into an HTML report
    Render {
        /// Path to the context document (JSON; comments allowed)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the report (defaults to <summary-slug>-<date>.html)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Refuse payloads with major findings
        #[arg(long)]
        strict: bool,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate and lint a context document without rendering
    Check {
        /// Path to the context document
        #[arg(short, long)]
        input: PathBuf,

        /// Emit findings as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Guided mode with prompts
    Interactive,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            stdout,
            strict,
            force,
        } => {
            let outcome = match generate_report(&input, ReportOptions { strict }) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{}", "❌ Rendering failed!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            };

            print_findings(&outcome.findings);

            if stdout {
                print!("{}", outcome.html);
                return;
            }

            let output =
                output.unwrap_or_else(|| PathBuf::from(default_report_filename(&outcome.context)));

            if output.exists() && !force {
                eprintln!(
                    "{}",
                    format!(
                        "❌ {} already exists (use --force to overwrite)",
                        output.display()
                    )
                    .red()
                    .bold()
                );
                std::process::exit(1);
            }

            if let Err(e) = std::fs::write(&output, &outcome.html) {
                eprintln!(
                    "{}",
                    format!("❌ Failed to write {}: {}", output.display(), e).red()
                );
                std::process::exit(1);
            }

            println!("{}", "✅ Report rendered successfully!".green().bold());
            println!();
            println!("📊 Summary:");
            println!("  - Day: {}", outcome.context.day_date);
            println!("  - Lesson pairs: {}", outcome.context.lesson_pairs.len());
            println!("  - Lessons shown: {}", outcome.context.lesson_count());
            println!("  - Output: {}", output.display());
        }

        Commands::Check { input, json } => {
            let context = match plan2html::parser::load_context(&input) {
                Ok(context) => context,
                Err(e) => {
                    eprintln!("{}", "❌ Invalid context document!".red().bold());
                    eprintln!("{}", format!("Error: {:#}", e).red());
                    std::process::exit(1);
                }
            };

            let findings = plan2html::analyzer::analyze_context(&context);

            if json {
                match serde_json::to_string_pretty(&findings) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("{}", format!("Error: {}", e).red());
                        std::process::exit(1);
                    }
                }
            } else {
                println!(
                    "Report for {}: {} pair(s), {} lesson(s)",
                    context.day_date,
                    context.lesson_pairs.len(),
                    context.lesson_count()
                );
                println!();

                if findings.is_empty() {
                    println!("{}", "✅ No findings!".green());
                } else {
                    println!(
                        "{}",
                        format!("Found {} finding(s):", findings.len()).yellow()
                    );
                    println!();
                    print_findings(&findings);
                }
            }

            if plan2html::analyzer::has_major_findings(&findings) {
                std::process::exit(1);
            }
        }

        Commands::Interactive => {
            if let Err(e) = plan2html::cli::run_interactive_mode() {
                eprintln!("{}", format!("Error: {:#}", e).red());
                std::process::exit(1);
            }
        }
    }
}

fn print_findings(findings: &[plan2html::Finding]) {
    for finding in findings {
        let severity = match finding.severity {
            Severity::Major => "🛑 MAJOR".red(),
            Severity::Minor => "⚠️  MINOR".yellow(),
            Severity::Info => "ℹ️  INFO".blue(),
        };

        println!("{} [{}]", severity, finding.location);
        println!("  {}", finding.message);
        if let Some(suggestion) = &finding.suggestion {
            println!("  💡 {}", suggestion.dimmed());
        }
    }
}

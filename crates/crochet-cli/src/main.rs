//! crochet CLI - amigurumi patterns from profile curves
//!
//! Reads a profile file, generates the row-by-row pattern and prints it as
//! written instructions or JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crochet_notation::{render_pattern, Terminology, TextSettings, YarnProfile};
use crochet_pattern::{
    compress_with, feasible_range, generate, plan_transition, DecreaseStyle, TransitionLimit,
};
use crochet_profile::sample_rows;

mod profile_file;

use profile_file::ProfileFile;

#[derive(Parser)]
#[command(name = "crochet")]
#[command(about = "Amigurumi pattern generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a pattern from a profile file
    Generate {
        /// Profile file (.toml or .json)
        profile: PathBuf,
        /// Piece height in cm (default: from the file, then the profile)
        #[arg(long)]
        height: Option<f64>,
        /// Built-in yarn profile (fingering, sport, dk, worsted, chunky)
        #[arg(short, long)]
        yarn: Option<String>,
        /// Use UK stitch names
        #[arg(long)]
        uk: bool,
        /// Fail on rows that cannot reach their stitch count
        #[arg(long)]
        strict: bool,
        /// Print the pattern as JSON
        #[arg(long)]
        json: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Plan a single row transition
    Plan {
        /// Stitches in the previous row
        previous: u32,
        /// Stitches wanted after the row
        target: u32,
        /// Use standard decreases instead of invisible ones
        #[arg(long)]
        standard: bool,
        /// Use UK stitch names
        #[arg(long)]
        uk: bool,
    },
    /// Print the profile radius at every row
    Sample {
        /// Profile file (.toml or .json)
        profile: PathBuf,
        /// Piece height in cm (default: from the file, then the profile)
        #[arg(long)]
        height: Option<f64>,
    },
    /// List built-in yarn profiles
    Yarns,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            profile,
            height,
            yarn,
            uk,
            strict,
            json,
            output,
        } => {
            let options = GenerateOptions {
                height,
                yarn,
                terminology: if uk { Terminology::Uk } else { Terminology::Us },
                strict,
                json,
            };
            let text = generate_file(&profile, &options)?;
            emit(&text, output.as_deref())?;
        }
        Commands::Plan {
            previous,
            target,
            standard,
            uk,
        } => {
            let style = if standard {
                DecreaseStyle::Standard
            } else {
                DecreaseStyle::Invisible
            };
            let terms = if uk { Terminology::Uk } else { Terminology::Us };
            println!("{}", plan_row(previous, target, style, terms)?);
        }
        Commands::Sample { profile, height } => {
            show_samples(&profile, height)?;
        }
        Commands::Yarns => {
            for yarn in YarnProfile::all_profiles() {
                println!(
                    "{:<10} {:<9} {:>5.2} mm  {:.1} st/cm  {:.1} rows/cm",
                    yarn.name,
                    yarn.weight.label(),
                    yarn.hook_mm,
                    yarn.gauge.stitches_per_cm,
                    yarn.gauge.rows_per_cm
                );
            }
        }
    }

    Ok(())
}

struct GenerateOptions {
    height: Option<f64>,
    yarn: Option<String>,
    terminology: Terminology,
    strict: bool,
    json: bool,
}

fn generate_file(path: &Path, options: &GenerateOptions) -> Result<String> {
    let file = ProfileFile::load(path)?;
    let profile = file.profile()?;
    let mut settings = file.resolved_settings(&profile, options.height);

    let yarn = match &options.yarn {
        Some(name) => Some(
            YarnProfile::find(name).with_context(|| format!("unknown yarn profile '{name}'"))?,
        ),
        None => None,
    };
    if let Some(yarn) = &yarn {
        yarn.apply(&mut settings);
    }
    if options.strict {
        settings.transition_limit = TransitionLimit::Strict;
    }

    log::info!(
        "generating {} ({:.1} cm, {} control points)",
        path.display(),
        settings.total_height_cm,
        profile.points().len()
    );
    let pattern = generate(&profile, &settings)
        .with_context(|| format!("generating pattern for {}", path.display()))?;

    for row in pattern.rows.iter().filter(|r| r.is_eased()) {
        log::warn!(
            "row {} holds {} stitches (profile asks for {})",
            row.row_number,
            row.stitch_count_after,
            row.target_count
        );
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(&pattern)?);
    }

    let title = file.title.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Amigurumi")
            .to_string()
    });
    Ok(render_pattern(
        &pattern,
        &TextSettings {
            title,
            terminology: options.terminology,
            yarn,
        },
    ))
}

fn plan_row(previous: u32, target: u32, style: DecreaseStyle, terms: Terminology) -> Result<String> {
    let actions = plan_transition(previous, target, style).with_context(|| {
        let range = feasible_range(previous);
        format!(
            "reachable counts from {previous} are {}..={}",
            range.start(),
            range.end()
        )
    })?;
    Ok(format!(
        "{} ({} stitches total)",
        compress_with(&actions, |a| terms.abbreviation(a)),
        target
    ))
}

fn show_samples(path: &Path, height: Option<f64>) -> Result<()> {
    let file = ProfileFile::load(path)?;
    let profile = file.profile()?;
    let settings = file.resolved_settings(&profile, height);

    let samples = sample_rows(&profile, settings.total_height_cm, settings.gauge.rows_per_cm)?;
    println!("{:>4}  {:>8}  {:>8}", "row", "height", "radius");
    for sample in samples {
        println!(
            "{:>4}  {:>8.3}  {:>8.3}",
            sample.row_index + 1,
            sample.height,
            sample.radius
        );
    }
    Ok(())
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_row() {
        assert_eq!(
            plan_row(6, 12, DecreaseStyle::Invisible, Terminology::Us).unwrap(),
            "[1 inc] repeat 6 times (12 stitches total)"
        );
        assert_eq!(
            plan_row(6, 6, DecreaseStyle::Invisible, Terminology::Uk).unwrap(),
            "[1 dc] repeat 6 times (6 stitches total)"
        );
    }

    #[test]
    fn test_plan_row_out_of_reach() {
        let err = plan_row(6, 59, DecreaseStyle::Invisible, Terminology::Us).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("3..=12"), "{message}");
        assert!(message.contains("cannot grow from 6 to 59"), "{message}");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "crochet", "generate", "ball.toml", "--height", "8", "--yarn", "dk", "--uk",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                height, yarn, uk, strict, ..
            } => {
                assert_eq!(height, Some(8.0));
                assert_eq!(yarn.as_deref(), Some("dk"));
                assert!(uk);
                assert!(!strict);
            }
            _ => panic!("expected generate"),
        }
    }
}

//! YTScript command line front-end.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ytscript_models::{
    Audience, HookType, ScriptGenerationRequest, StructureType, TechniqueCategory, Tone,
};
use ytscript_engine::{parse_request, ScriptGenerator};

mod file_config;

#[derive(Parser, Debug)]
#[command(name = "ytscript", version, about = "Assemble and score YouTube video scripts")]
struct Cli {
    /// TOML engine configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog exported with `catalog export`
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one script
    Generate(RequestArgs),

    /// Generate one script from a JSON request read from a file or stdin
    Request {
        /// Request file; stdin when omitted or "-"
        path: Option<PathBuf>,
    },

    /// Generate several scripts over distinct technique combinations
    Variations {
        #[command(flatten)]
        request: RequestArgs,

        #[arg(long, default_value_t = 3)]
        count: usize,
    },

    /// Print the timed section layout without rendering text
    Structure {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        niche: String,
        /// Minutes
        #[arg(long, default_value_t = 10)]
        duration: u32,
        #[arg(long)]
        hook: Option<HookType>,
        #[arg(long)]
        structure: Option<StructureType>,
    },

    /// Analyse a script read from a file or stdin
    Analyze {
        /// Script file; stdin when omitted or "-"
        path: Option<PathBuf>,
        #[arg(long)]
        video_id: Option<String>,
        /// Evaluate against this structure instead of the best match
        #[arg(long)]
        structure: Option<StructureType>,
        /// Target length in minutes
        #[arg(long)]
        target_minutes: Option<f64>,
    },

    /// Inspect the technique catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    Stats,
    Export,
    Search {
        query: String,
        #[arg(long)]
        category: Option<TechniqueCategory>,
    },
    Recommend {
        niche: String,
    },
    Outline {
        structure: StructureType,
    },
    Validate {
        hook: HookType,
        structure: StructureType,
        niche: String,
    },
    /// Patterns suited to one minute of a video
    Timing {
        minute: u32,
        /// Video length in minutes
        #[arg(long, default_value_t = 10)]
        length: u32,
    },
    /// Pattern suggestions at the 25%, 50% and 75% marks
    Plan {
        /// Video length in minutes
        #[arg(long, default_value_t = 10)]
        length: u32,
    },
}

#[derive(Args, Debug)]
struct RequestArgs {
    #[arg(long)]
    topic: String,
    #[arg(long)]
    niche: String,
    /// Minutes
    #[arg(long, default_value_t = 10)]
    duration: u32,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    hook: Option<HookType>,
    #[arg(long)]
    structure: Option<StructureType>,
    #[arg(long, default_value_t = Tone::Casual)]
    tone: Tone,
    #[arg(long, default_value_t = Audience::General)]
    audience: Audience,
    /// Leave out the closing call-to-action
    #[arg(long)]
    no_cta: bool,
    /// Extra template placeholder, repeatable
    #[arg(long = "context", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    context: Vec<(String, String)>,
}

impl RequestArgs {
    fn into_request(self) -> ScriptGenerationRequest {
        let mut request = ScriptGenerationRequest::new(self.topic, self.niche, self.duration)
            .with_tone(self.tone)
            .with_audience(self.audience)
            .with_cta(!self.no_cta);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(hook) = self.hook {
            request = request.with_hook(hook);
        }
        if let Some(structure) = self.structure {
            request = request.with_structure(structure);
        }
        for (key, value) in self.context {
            request = request.with_context(key, value);
        }
        request
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    // stdout carries the JSON output, so logs go to stderr
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,ytscript=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = file_config::load_engine_config(cli.config.as_deref())?;
    let catalog = file_config::load_catalog(cli.catalog.as_deref())?;
    let generator = ScriptGenerator::new(Arc::new(catalog), config)?;
    let catalog = generator.catalog();

    match cli.command {
        Command::Generate(args) => {
            let request = args.into_request();
            print_json(&generator.generate_script(&request)?)?;
        }
        Command::Request { path } => {
            let request = parse_request(&read_input(path)?)?;
            print_json(&generator.generate_script(&request)?)?;
        }
        Command::Variations { request, count } => {
            let request = request.into_request();
            let scripts = generator.generate_multiple_variations(&request, count)?;
            info!(count = scripts.len(), "Generated variations");
            print_json(&scripts)?;
        }
        Command::Structure {
            topic,
            niche,
            duration,
            hook,
            structure,
        } => {
            let built =
                generator.generate_complete_script_structure(&niche, hook, structure, duration, &topic)?;
            print_json(&built)?;
        }
        Command::Analyze {
            path,
            video_id,
            structure,
            target_minutes,
        } => {
            let text = read_input(path)?;
            if text.trim().is_empty() {
                bail!("script is empty");
            }
            let result = generator.analyzer().analyze_with_context(
                &text,
                video_id.as_deref(),
                structure,
                target_minutes,
            )?;
            print_json(&result)?;
        }
        Command::Catalog(command) => match command {
            CatalogCommand::Stats => print_json(&catalog.get_statistics())?,
            CatalogCommand::Export => println!("{}", catalog.to_json()?),
            CatalogCommand::Search { query, category } => {
                print_json(&catalog.search_techniques(&query, category))?
            }
            CatalogCommand::Recommend { niche } => {
                print_json(&catalog.get_recommendations_for_niche(&niche))?
            }
            CatalogCommand::Outline { structure } => {
                print_json(&catalog.outline(structure)?)?;
            }
            CatalogCommand::Validate {
                hook,
                structure,
                niche,
            } => print_json(&catalog.validate_combination(hook, structure, &niche)?)?,
            CatalogCommand::Timing { minute, length } => {
                print_json(&catalog.suggest_patterns_for_timestamp(minute, length))?
            }
            CatalogCommand::Plan { length } => print_json(&catalog.engagement_plan(length))?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("canal=Dev em Foco").unwrap(),
            ("canal".to_string(), "Dev em Foco".to_string())
        );
        assert_eq!(parse_key_value("url=a=b").unwrap().1, "a=b");
        assert!(parse_key_value("=x").is_err());
        assert!(parse_key_value("nada").is_err());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "ytscript",
            "generate",
            "--topic",
            "Como aprender Python",
            "--niche",
            "tecnologia",
            "--hook",
            "curiosity_gap",
            "--tone",
            "educational",
            "--audience",
            "iniciantes",
            "--context",
            "canal=Dev",
            "--no-cta",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let request = args.into_request();
        assert_eq!(request.hook_type, Some(HookType::CuriosityGap));
        assert_eq!(request.tone, Tone::Educational);
        assert_eq!(request.target_audience, Audience::Beginner);
        assert_eq!(request.target_duration, 10);
        assert!(!request.include_cta);
        assert_eq!(request.custom_context["canal"], serde_json::Value::from("Dev"));
    }

    #[test]
    fn test_catalog_timing_args() {
        let cli = Cli::try_parse_from(["ytscript", "catalog", "timing", "6", "--length", "12"]).unwrap();
        let Command::Catalog(CatalogCommand::Timing { minute, length }) = cli.command else {
            panic!("expected catalog timing");
        };
        assert_eq!((minute, length), (6, 12));

        let cli = Cli::try_parse_from(["ytscript", "catalog", "plan"]).unwrap();
        assert!(matches!(cli.command, Command::Catalog(CatalogCommand::Plan { length: 10 })));
    }

    #[test]
    fn test_tone_alias_accepted() {
        let cli = Cli::try_parse_from([
            "ytscript", "generate", "--topic", "Rust", "--niche", "tecnologia", "--tone", "educacional",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.tone, Tone::Educational);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let parsed = Cli::try_parse_from(["ytscript", "catalog", "outline", "space_opera"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

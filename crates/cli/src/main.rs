//! Component Deps CLI
//!
//! Analyzes dependencies of documented UI components stored in a JSON catalog.
//!
//! ## Commands
//!
//! - `analyze <NAME> --catalog <FILE>` - dependency record, optional chain, setup notes
//! - `schema` - JSON Schema of the analysis result
//!
//! ## Usage
//!
//! ```text
//! component-deps analyze dropdown --catalog components.json --recursive --format text
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use component_extract::RelationExtractor;
use component_graph::{Catalog, DependencyAnalyzer, GraphError, InMemoryStore, MatchStrategy};
use component_protocol::{AnalysisResult, AnalyzeOptions};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod render;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "component-deps", version, about = "Resolve UI component dependencies")]
struct Cli {
    /// Config file (defaults to ./component-deps.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the dependencies of one component
    Analyze(AnalyzeArgs),
    /// Print the JSON Schema of analysis results
    Schema,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Component name (case-insensitive)
    name: String,

    /// JSON catalog of components
    #[arg(long, short = 'c')]
    catalog: PathBuf,

    /// Expand required components transitively
    #[arg(long, short = 'r')]
    recursive: bool,

    /// Omit suggested components and enhancements
    #[arg(long)]
    no_suggestions: bool,

    /// Omit conflicts and warnings
    #[arg(long)]
    no_conflicts: bool,

    /// Output format; `dot` always expands the chain
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Override the configured phrase-matching strategy
    #[arg(long, value_enum)]
    matcher: Option<MatcherArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
    Dot,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MatcherArg {
    Exact,
    Substring,
    Tiered,
    Fuzzy,
}

impl From<MatcherArg> for MatchStrategy {
    fn from(arg: MatcherArg) -> Self {
        match arg {
            MatcherArg::Exact => Self::Exact,
            MatcherArg::Substring => Self::Substring,
            MatcherArg::Tiered => Self::Tiered,
            MatcherArg::Fuzzy => Self::Fuzzy,
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Schema => {
            let schema = schemars::schema_for!(AnalysisResult);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze(args) => {
            let (config, config_path) = Config::load(cli.config.as_deref())?;
            match &config_path {
                Some(path) => log::info!("Using config {}", path.display()),
                None => log::info!("Using default config"),
            }
            analyze(&args, &config)
        }
    }
}

fn analyze(args: &AnalyzeArgs, config: &Config) -> Result<ExitCode> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let strategy = args
        .matcher
        .map_or(config.matcher.strategy, MatchStrategy::from);
    let store = InMemoryStore::with_matcher(catalog, strategy.into_matcher())
        .context("Invalid catalog")?;
    log::info!("Loaded {} component(s)", store.len());

    let analyzer = DependencyAnalyzer::new(&store)
        .with_extractor(RelationExtractor::new(config.extractor_config()))
        .with_install_settings(config.install_settings());

    if args.format == OutputFormat::Dot {
        let resolver = analyzer.resolver();
        return match resolver.resolve(&args.name) {
            Ok(resolution) => {
                print!("{}", resolver.expand_chain(&resolution)?.to_dot());
                Ok(ExitCode::SUCCESS)
            }
            Err(err @ GraphError::ComponentNotFound(_)) => {
                eprintln!("error: {err}");
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        };
    }

    let options = AnalyzeOptions {
        include_suggestions: !args.no_suggestions,
        include_conflicts: !args.no_conflicts,
        recursive: args.recursive,
    };
    let result = analyzer.analyze(&args.name, options);

    match args.format {
        OutputFormat::Text => print!("{}", render::render_text(&result)),
        OutputFormat::Json | OutputFormat::Dot => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

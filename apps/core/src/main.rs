// Prompt Optimizer CLI
// Analyze a prompt or rewrite it for one or every registered coding assistant.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prompt_optimizer_core::config::{LogFormat, Settings};
use prompt_optimizer_core::PromptOptimizer;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "prompt-optimizer")]
#[command(about = "Profile a coding prompt and rewrite it for specific AI assistants")]
struct Args {
    /// Tool registry JSON file (overrides PROMPT_OPTIMIZER_TOOLS)
    #[arg(long, global = true)]
    tools: Option<PathBuf>,

    /// Lexicon JSON file (overrides PROMPT_OPTIMIZER_LEXICON)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the profile inferred for a prompt
    Analyze { prompt: String },
    /// Rewrite a prompt for a single tool
    Optimize {
        prompt: String,
        /// Tool identifier, e.g. "cursor"
        #[arg(short, long)]
        tool: String,
    },
    /// Rewrite a prompt for every registered tool, best first
    OptimizeAll { prompt: String },
    /// List registered tools
    Tools,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the JSON results; logs go to stderr
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn run(engine: &PromptOptimizer, command: Command) -> Result<()> {
    match command {
        Command::Analyze { prompt } => {
            let profile = engine.analyze(&prompt)?;
            print_json(&json!({ "analysis": profile }))
        }
        Command::Optimize { prompt, tool } => {
            let result = engine.optimize(&prompt, &tool, None)?;
            let info = engine.tool_info(&tool);
            print_json(&json!({
                "tool_id": tool,
                "tool_info": info,
                "result": result,
            }))
        }
        Command::OptimizeAll { prompt } => {
            let batch = engine.optimize_all(&prompt)?;
            print_json(&json!({
                "analysis": batch.profile,
                "results": batch.ranked(),
            }))
        }
        Command::Tools => {
            let tools: Vec<_> = engine
                .registry()
                .tools()
                .map(|tool| {
                    json!({
                        "id": tool.id,
                        "name": tool.name,
                        "description": tool.description,
                        "strategy": tool.resolved_strategy(),
                        "strengths": tool.strengths,
                        "weaknesses": tool.weaknesses,
                    })
                })
                .collect();
            print_json(&json!({ "tools": tools }))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_env().with_overrides(args.tools, args.lexicon);
    init_tracing(settings.log_format);

    let engine = settings
        .build_engine()
        .context("Failed to initialize prompt optimizer")?;

    run(&engine, args.command)
}

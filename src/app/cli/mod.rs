//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapters::{API_KEY_ENV, LocalModuleFilesystem};
use crate::app::commands::build::{BuildOptions, BuildOutcome, BuildTarget};
use crate::app::commands::send::{SendOptions, UserMessage};
use crate::app::commands::{build, init, send};
use crate::app::{AppContext, logging};
use crate::domain::{AppError, ModuleSelection, load_config};

#[derive(Parser)]
#[command(name = "modprompt")]
#[command(version)]
#[command(about = "Assemble system prompts from modular text fragments", long_about = None)]
struct Cli {
    /// Config file (defaults to ./modprompt.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Modules directory, overriding the config file
    #[arg(short = 'd', long, global = true)]
    modules_dir: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available modules
    #[clap(visible_alias = "ls")]
    List,
    /// Print a single module
    Show {
        /// Module name (file name without extension)
        name: String,
    },
    /// Assemble modules into one prompt
    #[clap(visible_alias = "b")]
    Build {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Write the prompt to this file instead of stdout
        #[arg(short, long, conflicts_with = "save")]
        output: Option<PathBuf>,
        /// Write the prompt to the configured output directory
        #[arg(short, long)]
        save: bool,
    },
    /// Assemble modules and send the prompt to the generation API
    Send {
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        message: MessageArgs,
        /// Show what would be sent without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Write starter modules into the modules directory
    Init {
        /// Target directory (defaults to the configured modules directory)
        dir: Option<PathBuf>,
        /// Write into a non-empty directory
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct SelectionArgs {
    /// Module to include; repeat to set order (default: all, sorted)
    #[arg(short, long = "module", value_name = "NAME")]
    modules: Vec<String>,
    /// Include no modules (header only)
    #[arg(long, conflicts_with = "modules")]
    none: bool,
}

impl SelectionArgs {
    fn into_selection(self) -> ModuleSelection {
        ModuleSelection::from_args(self.modules, self.none)
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MessageArgs {
    /// User message to send
    #[arg(long)]
    message: Option<String>,
    /// Use a built-in sample message (1-based)
    #[arg(long)]
    sample: Option<usize>,
}

impl MessageArgs {
    fn into_message(self) -> UserMessage {
        // The group guarantees exactly one of the two is set.
        match self.sample {
            Some(index) => UserMessage::Sample(index),
            None => UserMessage::Text(self.message.unwrap_or_default()),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let fs = LocalModuleFilesystem;
    let mut config = load_config(&fs, cli.config.as_deref())?;
    if let Some(dir) = cli.modules_dir {
        config.modules.dir = dir;
    }
    let ctx = AppContext::new(fs, config);

    match cli.command {
        Commands::List => run_list(&ctx),
        Commands::Show { name } => run_show(&ctx, &name),
        Commands::Build { selection, output, save } => {
            let target = match (output, save) {
                (Some(path), _) => BuildTarget::File(path),
                (None, true) => BuildTarget::DefaultFile,
                (None, false) => BuildTarget::Stdout,
            };
            run_build(&ctx, BuildOptions { selection: selection.into_selection(), target })
        }
        Commands::Send { selection, message, dry_run } => {
            let options = SendOptions {
                selection: selection.into_selection(),
                message: message.into_message(),
            };
            run_send(&ctx, options, dry_run)
        }
        Commands::Init { dir, force } => {
            let dir = dir.unwrap_or_else(|| ctx.config().modules.dir.clone());
            let outcome = init::execute(ctx.fs(), &dir, force)?;
            for path in &outcome.written {
                println!("✓ Wrote module: {}", path.display());
            }
            println!("✅ Initialized {} starter modules in {}", outcome.written.len(), dir.display());
            Ok(())
        }
    }
}

fn run_list(ctx: &AppContext<LocalModuleFilesystem>) -> Result<(), AppError> {
    let store = ctx.open_store()?;
    for name in store.list_modules() {
        println!("{}", name);
    }
    Ok(())
}

fn run_show(ctx: &AppContext<LocalModuleFilesystem>, name: &str) -> Result<(), AppError> {
    let store = ctx.open_store()?;
    let content = store.get(name)?;
    let banner = "=".repeat(80);
    println!("{banner}\nPreview of module: {name}\n{banner}");
    println!("{}", content);
    Ok(())
}

fn run_build(
    ctx: &AppContext<LocalModuleFilesystem>,
    options: BuildOptions,
) -> Result<(), AppError> {
    match build::execute(ctx, options)? {
        BuildOutcome::Printed { prompt, .. } => print!("{}", prompt),
        BuildOutcome::Saved { path, chars } => {
            println!("✓ Saved complete prompt to: {}", path.display());
            println!("  Total length: {} characters", chars);
        }
    }
    Ok(())
}

fn run_send(
    ctx: &AppContext<LocalModuleFilesystem>,
    options: SendOptions,
    dry_run: bool,
) -> Result<(), AppError> {
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty());
    let client = send::build_client(&ctx.config().generation, api_key, dry_run)?;

    let outcome = send::execute(ctx, &client, options)?;
    let response = outcome.response;

    if outcome.dry_run {
        println!("{}", response.text);
        return Ok(());
    }

    let banner = "=".repeat(80);
    println!("{banner}");
    println!("USER: {}", outcome.user_text);
    println!("{}", "-".repeat(80));
    println!("ASSISTANT: {}", response.text);
    println!("{banner}");
    if let (Some(input), Some(output)) = (response.input_tokens, response.output_tokens) {
        println!("Tokens used: {} input, {} output", input, output);
    }
    Ok(())
}

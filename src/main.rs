use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use metaview::{
    CommandDescriptor, CommandRegistry, Outcome, TerminalHost, Theme, ViewerCommand, ViewerConfig,
    ViewerError,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "metaview", version, about = "View STAR and PKL metadata files as HTML tables")]
struct Cli {
    /// Executable used to run the parser scripts
    #[arg(long, global = true)]
    parser: Option<PathBuf>,

    /// Directory containing the parser scripts
    #[arg(long, global = true)]
    scripts_dir: Option<PathBuf>,

    /// Directory the rendered pages are written to
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Theme for rendered pages (light, dark, high-contrast)
    #[arg(long, global = true)]
    theme: Option<Theme>,

    /// Print the outcome as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a registered viewer command, prompting for a file if none is given
    Run {
        /// Command identifier, e.g. metadataViewer.viewStar
        id: String,
        file: Option<PathBuf>,
    },
    /// Open a file with the viewer registered for its extension
    Open { file: PathBuf },
    /// List the registered viewer commands
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{:#}", e);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn build_config(cli: &Cli) -> ViewerConfig {
    let mut config = ViewerConfig::default();
    if let Some(parser) = &cli.parser {
        config = config.parser(parser);
    }
    if let Some(dir) = &cli.scripts_dir {
        config = config.scripts_dir(dir);
    }
    if let Some(dir) = &cli.out_dir {
        config = config.out_dir(dir);
    }
    if let Some(theme) = cli.theme {
        config = config.theme(theme);
    }
    config
}

/// Command to execute and its pre-supplied file; `None` for `list`
type Target = Option<(&'static CommandDescriptor, Option<PathBuf>)>;

fn resolve_target(registry: &CommandRegistry, command: &Commands) -> Result<Target, ViewerError> {
    match command {
        Commands::List => Ok(None),
        Commands::Run { id, file } => Ok(Some((registry.by_id(id)?, file.clone()))),
        Commands::Open { file } => Ok(Some((registry.for_path(file)?, Some(file.clone())))),
    }
}

/// 0 when a panel was displayed, 1 when the run was cancelled or failed
fn exit_status(outcome: &Outcome) -> u8 {
    if outcome.is_displayed() { 0 } else { 1 }
}

fn list_commands(registry: &CommandRegistry, json: bool) -> Result<()> {
    let commands: Vec<_> = registry.iter().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
    } else {
        for c in commands {
            println!("{:<26} {:<16} {:<6} {}", c.id, c.name, c.ext, c.script);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let registry = CommandRegistry::new();
    tracing::info!(commands = registry.len(), "Metadata Viewer activated");

    let Some((descriptor, file)) = resolve_target(&registry, &cli.command)? else {
        list_commands(&registry, cli.json)?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = build_config(&cli);
    let host = TerminalHost::new(&config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let outcome = runtime
        .block_on(ViewerCommand::new(descriptor, &config).execute(&host, file))
        .with_context(|| format!("{} failed", descriptor.name))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let Outcome::Displayed { panel, .. } = &outcome {
        if let Some(path) = &panel.location {
            println!("{}", path.display());
        }
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}

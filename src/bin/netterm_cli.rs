/*!
 * netterm CLI - tab completion over a world snapshot
 *
 * Loads a YAML/JSON world snapshot and answers completion queries the way
 * the in-game terminal would. Emits JSON for integration tests and tools.
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netterm_core::catalog::DARK_WEB_ITEMS;
use netterm_core::dispatch::completable_commands;
use netterm_core::structured_log::{init_logger, LogConfig, LogLevel};
use netterm_core::{list_immediate_children, slog_error, slog_info, CompletionConfig, GameState, TabCompleter, World};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "netterm_cli")]
#[command(about = "Netterm - terminal tab completion over a simulated network", long_about = None)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Append log events to this file as well as stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log as plain `[COMPONENT] event: message` lines instead of JSON
    #[arg(long, global = true)]
    plain_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete an argument slot of a partially typed line
    Complete {
        /// World snapshot (YAML, or JSON by extension)
        #[arg(short, long)]
        world: PathBuf,

        /// Completion config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// The partially typed line
        #[arg(short, long, allow_hyphen_values = true)]
        line: String,

        /// Argument slot under the cursor (0 = first argument)
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Working directory on the current host
        #[arg(long, default_value = "")]
        cwd: String,

        /// Sort candidates before printing
        #[arg(short, long)]
        sort: bool,

        /// Emit a JSON report instead of one candidate per line
        #[arg(short, long)]
        json: bool,
    },

    /// Complete the command keyword itself
    Keywords {
        #[arg(short, long)]
        world: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        line: String,

        #[arg(long, default_value = "")]
        cwd: String,

        /// Only list commands that have argument completion
        #[arg(long)]
        completable: bool,

        #[arg(short, long)]
        json: bool,
    },

    /// List the immediate children of a directory on the current host
    Ls {
        #[arg(short, long)]
        world: PathBuf,

        #[arg(short, long, default_value = "")]
        dir: String,
    },

    /// Print a world snapshot back as normalized YAML
    Dump {
        #[arg(short, long)]
        world: PathBuf,
    },

    /// Show the dark web store catalog
    Catalog {
        #[arg(short, long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config.min_level = LogLevel::Debug;
    }
    log_config.file_path = cli.log_file;
    log_config.json_output = !cli.plain_log;
    init_logger(log_config);

    if let Err(e) = run(cli.command).await {
        slog_error!("CLI", "command_failed", &format!("{:#}", e), None);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Complete { world, config, line, index, cwd, sort, json } => {
            let world = load_world(&world).await?;
            let config = load_config(config.as_deref()).await?;
            let completer = TabCompleter::with_config(&world, config);
            let mut report = completer
                .complete_report(&line, index, &cwd)
                .context("completion failed")?;
            if sort {
                report.candidates.sort();
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_lines(&report.candidates);
            }
        }
        Commands::Keywords { world, config, line, cwd, completable, json } => {
            let world = load_world(&world).await?;
            let config = load_config(config.as_deref()).await?;
            let keywords = if completable {
                completable_commands().into_iter().map(String::from).collect()
            } else {
                TabCompleter::with_config(&world, config)
                    .complete_command(&line, &cwd)
                    .context("completion failed")?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                print_lines(&keywords);
            }
        }
        Commands::Ls { world, dir } => {
            let world = load_world(&world).await?;
            let host = netterm_core::network::current_host(&world)?;
            print_lines(&list_immediate_children(host.path_keys(), &dir));
        }
        Commands::Dump { world } => {
            let world = load_world(&world).await?;
            print!("{}", world.to_yaml()?);
        }
        Commands::Catalog { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(DARK_WEB_ITEMS)?);
            } else {
                for item in DARK_WEB_ITEMS {
                    println!("{:<20} {:>14}  {}", item.program, item.price, item.description);
                }
            }
        }
        Commands::Version => {
            println!("netterm_cli v{}", env!("CARGO_PKG_VERSION"));
            println!("Netterm terminal completion resolver");
        }
    }

    Ok(())
}

async fn load_world(path: &Path) -> Result<World> {
    let world = World::load(path)
        .await
        .with_context(|| format!("failed to load world {}", path.display()))?;
    slog_info!(
        "CLI",
        "world_loaded",
        serde_json::json!({
            "path": path.display().to_string(),
            "hosts": world.hostnames().len(),
            "current": world.current_hostname(),
        })
    );
    Ok(world)
}

async fn load_config(path: Option<&Path>) -> Result<CompletionConfig> {
    match path {
        Some(path) => CompletionConfig::load(path)
            .await
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(CompletionConfig::default()),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

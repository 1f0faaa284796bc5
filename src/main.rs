//! Print, export and run the demo automata.
//!
//! ```bash
//! fsmdot list                          # Names of the demos
//! fsmdot table powerset --dfa          # Table of the determinized automaton
//! fsmdot dot mod-three -o mod3.dot     # Graphviz export
//! fsmdot accept aaa abaaab             # Exit status tells whether the input is accepted
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use fsmdot::{demos, RankDir, RenderConfig, Result, TableStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fsmdot", version, about = "Finite-state machines: tables, dot graphs and acceptance")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available demos
    List,

    /// Print the state-transition table of a demo
    Table {
        #[command(flatten)]
        target: Target,

        /// Table layout
        #[arg(long, value_enum, env = "FSMDOT_TABLE_STYLE", default_value_t = TableStyle::Grid)]
        style: TableStyle,
    },

    /// Print or write a demo as a graphviz dot graph
    Dot {
        #[command(flatten)]
        target: Target,

        /// Layout direction
        #[arg(long, value_enum, env = "FSMDOT_RANKDIR", default_value_t = RankDir::LeftRight)]
        rankdir: RankDir,

        /// Name of the graph
        #[arg(long, default_value = "fsm")]
        name: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exit with status 0 if the demo accepts the input, 1 otherwise
    Accept {
        /// Demo name
        demo: String,

        /// Input string, one symbol per character
        input: String,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Demo name
    demo: String,

    /// Convert an NFA with the powerset construction first
    #[arg(long)]
    dfa: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::List => {
            let width = demos::CATALOGUE.iter().map(|e| e.name.len()).max().unwrap_or(0);
            for entry in demos::CATALOGUE {
                println!("{:<width$}  {}", entry.name, entry.description, width = width);
            }
        }
        Commands::Table { target, style } => {
            let config = RenderConfig::new().with_table_style(style);
            let demo = demos::load(&target.demo)?;
            print!("{}", demo.table(&config, target.dfa));
        }
        Commands::Dot {
            target,
            rankdir,
            name,
            output,
        } => {
            let config = RenderConfig::new()
                .with_rankdir(rankdir)
                .with_graph_name(name);
            let demo = demos::load(&target.demo)?;
            let dot = demo.dot(&config, target.dfa);
            match output {
                Some(path) => {
                    fs::write(&path, dot)?;
                    info!("wrote {}", path.display());
                }
                None => io::stdout().write_all(dot.as_bytes())?,
            }
        }
        Commands::Accept { demo, input } => {
            let accepted = demos::load(&demo)?.accept(&input)?;
            debug!("{} on {:?}: {}", demo, input, accepted);
            println!("{}", accepted);
            return Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}

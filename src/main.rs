//! Folio - headless driver for the portfolio phone mockup
//!
//! This is the binary entry point. All logic lives in the library.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::{render_placement, run_replay, PlacementFormat};
use folio_app::config::{init_config_dir, load_settings, read_settings};
use folio_core::ScreenId;

/// Folio - inspect and replay the phone-mockup prototype
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Inspect and replay the portfolio phone-mockup prototype", long_about = None)]
struct Args {
    /// Directory containing `.folio/config.toml`
    #[arg(long, value_name = "DIR", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the overlay placement for the configured device frame
    Placement {
        #[arg(long, value_enum, default_value_t = PlacementFormat::Css)]
        format: PlacementFormat,
    },

    /// Replay a navigation script and print NDJSON events
    Replay {
        /// Script file (reads stdin when omitted)
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,
    },

    /// List the prototype's screens
    Screens,

    /// Write a default `.folio/config.toml`
    Init,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    folio_core::logging::init()?;

    let args = Args::parse();
    let explicit_config = args.config.is_some();
    let project = args
        .config
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // An explicit --config must exist and parse; the working directory's is optional
    let settings = match args.command {
        Cmd::Init => Default::default(),
        _ if explicit_config => read_settings(&project)?,
        _ => load_settings(&project),
    };

    match args.command {
        Cmd::Placement { format } => {
            println!("{}", render_placement(&settings.frame(), format)?);
        }
        Cmd::Replay { script } => {
            let mut stdout = io::stdout().lock();
            match script {
                Some(path) => {
                    let file = File::open(&path)?;
                    run_replay(BufReader::new(file), &mut stdout, &settings)?;
                }
                None => {
                    run_replay(io::stdin().lock(), &mut stdout, &settings)?;
                }
            }
        }
        Cmd::Screens => {
            for screen in ScreenId::ALL {
                let reachable = if screen.destination().is_some() {
                    "menu"
                } else {
                    "list selection"
                };
                println!("{:<10} {:<16} via {}", screen, screen.label(), reachable);
            }
        }
        Cmd::Init => {
            let path = init_config_dir(&project)?;
            eprintln!("Config written to {}", path.display());
        }
    }

    Ok(())
}

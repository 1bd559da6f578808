//! bubbles-demo: interactive demos for the header and footer widgets

mod footer_demo;
mod header_demo;
mod terminal;

use bubbles_widgets::{Header, UiConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use footer_demo::FooterDemo;
use header_demo::{HeaderDemo, DEFAULT_DESCRIPTION};

/// Environment variable naming the log file.
const LOG_VAR: &str = "BUBBLES_LOG";

/// Interactive demos for the bubbles header and footer widgets
#[derive(Parser)]
#[command(name = "bubbles-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a header above an empty screen (q, Esc or Ctrl+C to quit)
    Header {
        /// Header title
        #[arg(long, default_value = "Lorem ipsum")]
        title: String,

        /// Version tag shown next to the title (blank to hide)
        #[arg(long = "tag", default_value = "0.1.0")]
        tag: String,

        /// Description shown under the title (blank to hide)
        #[arg(long, default_value = DEFAULT_DESCRIPTION)]
        description: String,

        /// Do not underline the header
        #[arg(long)]
        no_border: bool,
    },

    /// Show a footer with a toggleable help panel (Esc or Ctrl+C to quit)
    Footer,
}

/// Install a file-backed subscriber when `BUBBLES_LOG` names a log file.
///
/// Logs never go to the terminal, which is in raw mode while a demo runs.
fn init_logging() {
    let Some(path) = std::env::var_os(LOG_VAR) else {
        return;
    };

    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("bubbles_widgets=debug,bubbles_demo=debug")),
                )
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("Warning: cannot open log file {}: {e}", path.to_string_lossy()),
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config = UiConfig::from_env();
    tracing::debug!(?config, "starting demo");

    let result = match cli.command {
        Commands::Header {
            title,
            tag,
            description,
            no_border,
        } => {
            let mut builder = Header::builder(title)
                .version(tag)
                .description(description)
                .theme(config.palette())
                .borders(config.borders());
            if !no_border {
                builder = builder.border();
            }
            terminal::run(&mut HeaderDemo::new(builder.build()))
        }
        Commands::Footer => terminal::run(&mut FooterDemo::new(config.palette())),
    };

    if let Err(e) = result {
        eprintln!("Could not start program: {e}");
        std::process::exit(1);
    }
}

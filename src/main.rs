use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use keycalc::calculator::{AngleMode, copy_to_clipboard};
use keycalc::config::Config;
use keycalc::keys::{Input, parse_line};
use keycalc::session::{Flow, Session};

/// Keypad calculator for the terminal.
///
/// Type keys separated by spaces or run together, e.g. `12+3=` or
/// `2 pow 10 =`. `sci` shows the scientific panel, `copy` copies the
/// display, `quit` exits.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Apply these keys, print the display and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Start in degree mode
    #[arg(short, long)]
    degrees: bool,

    /// Start with the scientific panel shown
    #[arg(short, long)]
    scientific: bool,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the session state as JSON after every line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keycalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.degrees {
        config.angle_mode = AngleMode::Degrees;
    }
    if cli.scientific {
        config.scientific = true;
    }

    let mut session = Session::new(&config);

    if let Some(keys) = &cli.keys {
        let inputs = parse_line(keys)?;
        for input in inputs {
            if handle(&mut session, input) {
                break;
            }
        }
        print_state(&session, cli.json)?;
        return Ok(());
    }

    run_interactive(&mut session, cli.json)
}

fn run_interactive(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    print_state(session, json)?;

    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let inputs = match parse_line(&line) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let mut quit = false;
        for input in inputs {
            if handle(session, input) {
                quit = true;
                break;
            }
        }
        if quit {
            break;
        }

        print_state(session, json)?;
    }

    Ok(())
}

/// Handle one input. Returns `true` when the session should end.
fn handle(session: &mut Session, input: Input) -> bool {
    match session.handle(input) {
        Flow::Continue => false,
        Flow::Copy(text) => {
            if let Err(e) = copy_to_clipboard(&text) {
                tracing::warn!(error = %e, "clipboard copy failed");
            }
            false
        }
        Flow::Ignored(key) => {
            eprintln!("{} is on the scientific panel (type `sci` to show it)", key);
            false
        }
        Flow::Quit => true,
    }
}

fn print_state(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(session)?);
    } else {
        println!("{}", session.status_line());
    }
    Ok(())
}

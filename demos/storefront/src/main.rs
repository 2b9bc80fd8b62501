// storefront/src/main.rs

// Declare modules for the application
mod commands;
mod config;
mod errors;
mod menu;
mod placement;
mod shell;

use crate::config::AppConfig;
use crate::shell::{Flow, Storefront};

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn main() -> ExitCode {
  // Initialize tracing subscriber for logging. Logs go to stderr so they do
  // not interleave with the storefront's own output.
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .with_writer(io::stderr)
    .init();

  tracing::info!("Starting Sakura Sushi storefront...");

  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(error = %e, "Storefront terminated with an error.");
      ExitCode::FAILURE
    }
  }
}

fn run() -> errors::Result<()> {
  let app_config = AppConfig::from_env()?;
  let catalog = menu::load_catalog(&app_config)?;
  let mut storefront = Storefront::new(app_config, catalog);

  let stdin = io::stdin();
  let mut stdout = io::stdout();
  writeln!(stdout, "🍣 Sakura Sushi — type 'help' for commands")?;

  loop {
    write!(stdout, "> ")?;
    stdout.flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      break; // EOF
    }

    // Bad input is reported and the prompt continues.
    let command = match commands::parse(&line) {
      Ok(Some(command)) => command,
      Ok(None) => continue,
      Err(e) => {
        writeln!(stdout, "{}", e)?;
        continue;
      }
    };

    match storefront.execute(command, &mut stdout) {
      Ok(Flow::Continue) => {}
      Ok(Flow::Quit) => break,
      Err(e) => writeln!(stdout, "{}", e)?,
    }
  }

  tracing::info!(
    items_left_in_cart = storefront.session().cart().total_items(),
    "Storefront closed."
  );
  Ok(())
}

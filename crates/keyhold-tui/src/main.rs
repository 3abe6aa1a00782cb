//! Keyhold - a single-screen password keeper over the platform keychain
//!
//! Type a password, press Enter to store it in the OS keychain, see the
//! stored value on screen, and delete it again with Ctrl-D.

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;

use app::App;
use keyhold_core::open_default_store;

#[derive(Parser)]
#[command(name = "keyhold")]
#[command(about = "Store, display, and delete a password in the platform keychain")]
#[command(version)]
#[command(after_help = r#"KEY BINDINGS:
    Enter       Save the typed password
    Ctrl-D      Delete the stored password
    Backspace   Edit the input
    Esc         Quit (or dismiss an open dialog)

The stored value is shown in the "Stored" panel; when nothing is
stored the panel shows the placeholder "Keychain". Logs go to stderr
(RUST_LOG controls verbosity), so redirect with 2>keyhold.log when
debugging."#)]
struct Args {
    /// Keep the credential in process memory instead of the platform keychain
    #[arg(long)]
    memory: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let store = open_default_store(args.memory);
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.on_key(key) {
                return Ok(());
            }
        }
    }
}

//! sheaf-palette binary: terminal palette for SheafUI components.
//!
//! Wiring:
//! 1. Event (keyboard) -> Palette.handle_event() -> Actions
//! 2. Actions dispatched through the reducer
//! 3. Reducer updates state and returns effects
//! 4. Effects (clipboard, browser) handled by the TaskManager
//! 5. If state changed, re-render

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sheaf_palette::components::{Component, Palette, PaletteProps};
use sheaf_palette::{
    host, Action, AppState, Effect, EffectContext, Runtime, CATALOG,
};

/// Status tick period; drives status-message auto-dismiss.
const TICK_MS: u64 = 100;

/// Browse, filter and copy SheafUI component snippets
#[derive(Parser, Debug)]
#[command(name = "sheaf-palette")]
#[command(about = "Terminal command palette for SheafUI components")]
struct Args {
    /// Initial filter query
    #[arg(long, short)]
    query: Option<String>,

    /// Print the catalog to stdout and exit
    #[arg(long)]
    list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long)]
    json: bool,

    /// Append logs to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: &PathBuf) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_catalog(json: bool) -> io::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(CATALOG)?;
        println!("{}", out);
    } else {
        let width = CATALOG
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0);
        for record in CATALOG {
            println!("{:width$}  {}", record.name, record.description, width = width);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(ref log_file) = args.log_file {
        init_tracing(log_file)?;
    }

    if args.list || args.json {
        return print_catalog(args.json);
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args.query.unwrap_or_default()).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    query: String,
) -> io::Result<()> {
    let mut runtime = Runtime::new(AppState::with_query(query));

    // Tick timer for status-message auto-dismiss
    runtime.subscribe_interval(Duration::from_millis(TICK_MS), || Action::Tick);

    let ui = RefCell::new(Palette::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut().render(frame, area, PaletteProps { state });
            },
            |event, state| ui.borrow_mut().handle_event(event, PaletteProps { state }),
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks; completions come back as actions.
fn handle_effect(effect: Effect, ctx: &mut EffectContext) {
    match effect {
        Effect::CopyText { text, confirm } => {
            ctx.tasks().spawn("clipboard", async move {
                let result =
                    tokio::task::spawn_blocking(move || host::copy_to_clipboard(&text)).await;
                match result {
                    Ok(Ok(())) => Action::ClipboardDidCopy(confirm),
                    Ok(Err(e)) => {
                        warn!(error = %e, "clipboard write failed");
                        Action::ClipboardDidError(e.to_string())
                    }
                    Err(e) => Action::ClipboardDidError(e.to_string()),
                }
            });
        }
        Effect::OpenUrl { url } => {
            ctx.tasks().spawn("open_docs", async move {
                let result =
                    tokio::task::spawn_blocking(move || host::open_in_browser(&url)).await;
                match result {
                    Ok(Ok(())) => Action::DocsDidOpen,
                    Ok(Err(e)) => {
                        warn!(error = %e, "browser launch failed");
                        Action::DocsDidError(e.to_string())
                    }
                    Err(e) => Action::DocsDidError(e.to_string()),
                }
            });
        }
    }
}

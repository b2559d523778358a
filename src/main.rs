//! cyberfolio - Cyberpunk Portfolio
//!
//! An animated personal portfolio for the terminal.
//!
//! Features:
//! - Home, About, Experience, Projects, Blog and Contact pages
//! - Five neon themes with dark and cyberpunk modes
//! - Particle field, perspective grid and cursor trail effects
//! - A clickable shooting-gallery background
//! - Glitching titles
//!
//! Usage: cyberfolio [--route PATH] [--theme NAME] [--themes]

mod app;
mod config;
mod content;
mod fx;
mod store;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::stdout;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use types::Route;

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    route: Option<String>,
    theme: Option<String>,
    list_themes: bool,
    help: bool,
    version: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--version" => parsed.version = true,
            "--themes" => parsed.list_themes = true,
            "--route" | "-r" => {
                parsed.route = Some(iter.next().context("--route needs a path")?.clone());
            }
            "--theme" | "-t" => {
                parsed.theme = Some(iter.next().context("--theme needs a name")?.clone());
            }
            other => bail!("Unknown argument: {} (see --help)", other),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args)?;

    if args.help {
        print_help();
        return Ok(());
    }

    if args.version {
        println!("cyberfolio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.list_themes {
        let themes = serde_json::to_string_pretty(&store::builtin_themes())
            .context("Failed to serialize themes")?;
        println!("{}", themes);
        return Ok(());
    }

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Run the application
    let result = run_app(args);

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"cyberfolio - Cyberpunk Portfolio

USAGE:
    cyberfolio [OPTIONS]

OPTIONS:
    -r, --route PATH    Open a page, e.g. /about
    -t, --theme NAME    Start with a theme, e.g. "Matrix Green"
        --themes        Print the theme registry as JSON
    -h, --help          Print help information
    -v, --version       Print version information

KEYBINDINGS:
    1-6                 Switch page
    Tab / Shift-Tab     Next / previous page
    :                   Go to a path (also reaches /skills)
    t                   Cycle theme
    d                   Toggle dark mode
    x                   Toggle cyberpunk mode
    c                   Cycle cursor style
    b                   Toggle interactive background
    e                   Edit the contact form (Contact page)
    ?                   Show keys
    q                   Quit

MOUSE:
    Move                Cursor trail
    Left click          Fire at targets (interactive background)

CONFIG:
    ~/.config/cyberfolio/config.toml

LOG:
    ~/.cache/cyberfolio/cyberfolio.log (filter with RUST_LOG)
"#
    );
}

/// Send tracing output to a file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("cyberfolio");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let path = dir.join("cyberfolio.log");
    let log_file =
        File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cyberfolio=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

fn run_app(args: Args) -> Result<()> {
    // Load configuration
    let mut config = config::Config::load().context("Failed to load configuration")?;

    if let Some(path) = args.route {
        if Route::from_path(&path).is_none() {
            bail!("No page at {}", path);
        }
        config.start_route = path;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let interval = config.frame_interval();
    tracing::info!(theme = %config.theme, route = %config.start_route, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = terminal
        .size()
        .context("Failed to read terminal size")
        .and_then(|size| {
            let area = Rect::new(0, 0, size.width, size.height);
            let mut app = App::new(config, ui::content_area(area));
            main_loop(&mut terminal, &mut app, interval)
        });

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, interval: Duration) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Wait for input until the next frame is due
        let timeout = interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    app.resize(ui::content_area(Rect::new(0, 0, width, height)));
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= interval {
            app.tick(elapsed);
            last_frame = Instant::now();
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    tracing::info!("quit");
    Ok(())
}

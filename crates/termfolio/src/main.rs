use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::Duration,
};
use termfolio::app::App;
use termfolio::config::Config;
use termfolio::dotfiles::{self, DirectorySource, DotfileSource, HttpSource};
use termfolio::services::log_dirs;
use termfolio::services::terminal_modes::{self, TerminalModes};
use termfolio::services::time_source::RealTimeSource;
use termfolio::services::tracing_setup;

/// A terminal portfolio with live-typing dotfiles
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "A terminal portfolio with live-typing dotfiles", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: the state directory, see --show-paths)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Read dotfiles from a local checkout instead of over HTTP
    #[arg(long, value_name = "DIR")]
    dotfiles_dir: Option<PathBuf>,

    /// Do not load dotfiles at all
    #[arg(long)]
    offline: bool,

    /// Seed for the typing randomness, for reproducible animations
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by termfolio and exit
    #[arg(long)]
    show_paths: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.show_paths {
        log_dirs::print_all_paths(&mut io::stdout().lock())?;
        return Ok(());
    }

    if args.dump_config {
        let config = Config::load(args.config.as_deref())
            .context("Failed to load config")?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("termfolio {} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut app = App::new(config.clone(), RealTimeSource::shared());
    if let Some(seed) = args.seed {
        app = app.with_seed(seed);
    }
    if let Some(source) = dotfile_source(&args, &config) {
        app.attach_loader(dotfiles::spawn_loader(
            source,
            config.dotfiles.manifest.clone(),
        ));
    }

    let mut terminal_modes = TerminalModes::enable()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let frame_duration = Duration::from_millis(config.frame_interval_ms);
    let result = run_event_loop(&mut app, &mut terminal, frame_duration);

    terminal_modes.undo();
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:#}", e);
    }
    tracing::info!("termfolio exiting");
    result
}

/// Where dotfiles come from, or `None` when they should not be loaded.
fn dotfile_source(args: &Args, config: &Config) -> Option<Box<dyn DotfileSource + Send>> {
    if args.offline || !config.dotfiles.enabled {
        tracing::info!("Dotfile loading disabled");
        return None;
    }
    let local_dir = args
        .dotfiles_dir
        .clone()
        .or_else(|| config.dotfiles.local_dir.clone());
    match local_dir {
        Some(dir) => {
            tracing::info!("Reading dotfiles from {}", dir.display());
            Some(Box::new(DirectorySource::new(dir)))
        }
        None => {
            tracing::info!("Fetching dotfiles from {}", config.dotfiles.raw_base_url);
            Some(Box::new(HttpSource::new(
                config.dotfiles.raw_base_url.clone(),
                Duration::from_secs(config.dotfiles.timeout_secs),
            )))
        }
    }
}

/// Draw a frame, wait for input until the next one is due, repeat.
fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    frame_duration: Duration,
) -> AnyhowResult<()> {
    use std::time::Instant;

    loop {
        let frame_start = Instant::now();
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            break;
        }

        // Drain input until the frame budget is spent
        loop {
            let timeout = frame_duration.saturating_sub(frame_start.elapsed());
            if !event_poll(timeout)? {
                break;
            }
            match event_read()? {
                CrosstermEvent::Resize(w, h) => {
                    tracing::trace!("Resized to {}x{}", w, h);
                    terminal.autoresize()?;
                }
                event => app.handle_event(event),
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }

    Ok(())
}

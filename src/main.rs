use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;

use smartaihub::api::ApiClient;
use smartaihub::app::App;
use smartaihub::config::{self, Config};
use smartaihub::recommend::error_message;

/// Find movies with live title suggestions from the SmartAIHub backend
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print recommendations for a title and exit
    Recommend {
        /// Movie title to find similar movies for
        title: String,
    },
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging();

    let config = resolve_config(&cli)?;
    let client = ApiClient::from_config(&config.api)?;

    // Everything runs on one thread: timers, lookups and the UI loop
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Command::Recommend { title }) => {
            runtime.block_on(print_recommendations(&client, &title))
        }
        None => {
            let app = App::new(client, &config.suggest);

            // Initialize terminal (handles raw mode, alternate screen, etc.)
            let terminal = ratatui::init();
            let result = runtime.block_on(run(terminal, app));

            // Restore terminal before any error is reported
            ratatui::restore();
            result
        }
    }
}

async fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                // Only process key press events (avoid duplicates)
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(message) = app.next_message() => app.handle_message(message),
        }
    }

    Ok(())
}

async fn print_recommendations(client: &ApiClient, title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(eyre!("Title must not be empty"));
    }

    let recommendations = client
        .recommend(title.trim())
        .await
        .map_err(|e| eyre!(error_message(&e)))?;

    if recommendations.is_empty() {
        println!("No recommendations found for {:?}.", title.trim());
        return Ok(());
    }

    println!("Top {} Recommendations:", recommendations.len());
    for (i, movie) in recommendations.iter().enumerate() {
        match movie.score {
            Some(score) => println!("{:>3}. {}  (similarity: {:.3})", i + 1, movie.title, score),
            None => println!("{:>3}. {}", i + 1, movie.title),
        }
    }
    Ok(())
}

/// Explicit `--config` must load; the default location degrades to defaults
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::read_config(path)?,
        None => {
            let loaded = config::load_config();
            if let Some(warning) = loaded.warning {
                log::warn!("{}", warning);
                eprintln!("warning: {}", warning);
            }
            loaded.config
        }
    };

    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.clone();
    }
    Ok(config)
}

/// Log to a file: the terminal belongs to the UI
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Logging is skipped
/// silently if the cache directory is unavailable.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("smartaihub")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("smartaihub.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

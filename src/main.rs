use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mindpalace::config::{Config, LogFormat};
use mindpalace::db::{self, EntryStore};
use mindpalace::models::emotion::{resolve_color_input, EmotionColor};
use mindpalace::models::entry::{NewEntry, DEFAULT_INTENSITY};
use mindpalace::services::collaborators::{FileImageSource, ImageSource, StdoutShareSink};
use mindpalace::services::export::ExportTarget;
use mindpalace::services::journal::Journal;
use mindpalace::AppResult;

#[derive(Parser, Debug)]
#[command(name = "mindpalace", version, about = "Local mood journal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new entry
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        body: Option<String>,

        /// Palette name (red, orange, yellow, green, blue, purple, pink, white) or hex code
        #[arg(long, default_value = "blue")]
        color: String,

        /// 0-100
        #[arg(long, default_value_t = DEFAULT_INTENSITY, allow_negative_numbers = true)]
        intensity: i32,

        /// Photo to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Show every entry, newest first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show the weekly summary
    Wrapped {
        /// Hand the summary card to the share target
        #[arg(long)]
        share: bool,
    },

    /// Write all entries to the export file
    Export,

    /// Check that the store is reachable
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(config.log_format);

    let cli = Cli::parse();

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.status_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mindpalace=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn run(command: Command, config: &Config) -> AppResult<()> {
    let pool = db::create_pool(&config.database_url).await?;
    let store = EntryStore::new(pool);

    match command {
        Command::Add {
            title,
            body,
            color,
            intensity,
            image,
        } => {
            let image_uri = FileImageSource::new(image).pick().await?;
            let entry = NewEntry {
                title,
                body,
                emotion_color: resolve_color_input(&color),
                intensity,
                image_uri,
            };

            let mut journal = Journal::open(store).await?;
            let id = journal.save_entry(&entry, &chrono::Local::now()).await?;
            println!("saved entry {id} ({} total)", journal.entries().len());
        }
        Command::List { json } => {
            let journal = Journal::open(store).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(journal.entries())?);
            } else {
                for entry in journal.entries() {
                    let color = entry
                        .emotion()
                        .map(EmotionColor::name)
                        .unwrap_or(entry.emotion_color.as_str());
                    println!(
                        "#{:<4} {}  {:<7} {:>3}%  {}",
                        entry.id, entry.date, color, entry.intensity, entry.title
                    );
                }
            }
        }
        Command::Wrapped { share } => {
            let journal = Journal::open(store).await?;
            if share {
                if !journal.share_wrapped(&StdoutShareSink).await? {
                    println!("no entries yet");
                }
            } else {
                match journal.wrapped() {
                    Some(stats) => println!(
                        "{}  {}% of {} entries  ({})",
                        stats.vibe_name, stats.percentage, stats.total_entries, stats.top_color
                    ),
                    None => println!("no entries yet"),
                }
            }
        }
        Command::Export => {
            let journal = Journal::open(store).await?;
            let target = ExportTarget::from_config(config);
            let report = journal.export(&target, &StdoutShareSink).await?;
            tracing::info!(entries = report.entries, "Export complete");
        }
        Command::Status => {
            store.check_ready().await?;
            println!("database: ok");
        }
    }

    Ok(())
}

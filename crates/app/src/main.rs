use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AppSettingsService, ChatService, Clock, PracticeService, ReviewService,
    TestService, WordService,
};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};
use vocab_core::model::{Phonetic, WordDraft, WordId};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn review(&self) -> Arc<ReviewService> {
        self.services.review()
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn tests(&self) -> Arc<TestService> {
        self.services.tests()
    }

    fn words(&self) -> Arc<WordService> {
        self.services.words()
    }

    fn app_settings(&self) -> Arc<AppSettingsService> {
        self.services.app_settings()
    }

    fn open_chat(&self) -> ChatService {
        self.services.open_chat()
    }

    fn clock(&self) -> Clock {
        self.services.clock()
    }
}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dev.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCAB_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("VOCAB_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://dev.sqlite3".into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// The starter review list, with US/UK transcriptions.
fn starter_words() -> Vec<(u64, &'static str, &'static str, &'static str)> {
    vec![
        (1, "painless", "/ˈpeɪnləs/", "/ˈpeɪnləs/"),
        (2, "example", "/ɪɡˈzæmpəl/", "/ɪɡˈzɑːmpl/"),
        (3, "vaccination", "/ˌvæksɪˈneɪʃn/", "/ˌvæksɪˈneɪʃn/"),
        (4, "difficult", "/ˈdɪfɪkəlt/", "/ˈdɪfɪkəlt/"),
        (5, "unpleasant", "/ʌnˈpleznt/", "/ʌnˈpleznt/"),
    ]
}

async fn seed(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Storage::sqlite(db_url).await?;

    let words = starter_words();
    let count = words.len();
    for (id, word, us, uk) in words {
        let entry = WordDraft::new(word, Phonetic::new(us, uk)).validate(WordId::new(id))?;
        storage.words.upsert_word(&entry).await?;
    }

    println!("Seeded {count} words into {db_url}");
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launch the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;

    match cmd {
        Command::Ui => {
            let services = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock()).await?;
            let context = build_app_context(Arc::new(DesktopApp { services }));

            // Explicitly disable always-on-top so the app doesn't behave like
            // a modal window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("无痛英语")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => seed(&parsed.db_url).await,
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

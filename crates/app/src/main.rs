use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use casefile_core::model::SourceUrl;
use services::{
    AppServices, Clock, FeedbackAudio, GameService, IdentityProvider, LocalIdentity, UserProfile,
    VocabularyService,
};
use ui::{App, UiApp, WebviewAudio, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidSheetUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidSheetUrl { raw } => write!(f, "invalid --sheet-url value: {raw}"),
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
    fn identity(&self) -> Arc<dyn IdentityProvider> {
        self.services.identity()
    }

    fn games(&self) -> Arc<GameService> {
        self.services.games()
    }

    fn vocabulary(&self) -> Arc<VocabularyService> {
        self.services.vocabulary()
    }

    fn audio(&self) -> Arc<dyn FeedbackAudio> {
        self.services.audio()
    }
}

struct Args {
    db_url: String,
    sheet_url: Option<SourceUrl>,
    user: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--sheet-url <url>] [--user <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:casefile.sqlite3");
    eprintln!("  --user Agent");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CASEFILE_DB_URL, CASEFILE_SHEET_URL, CASEFILE_USER");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("CASEFILE_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://casefile.sqlite3".into(), normalize_sqlite_url);
        let mut sheet_raw = std::env::var("CASEFILE_SHEET_URL").ok();
        let mut user = std::env::var("CASEFILE_USER").unwrap_or_else(|_| "Agent".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--sheet-url" => {
                    sheet_raw = Some(require_value(args, "--sheet-url")?);
                }
                "--user" => {
                    user = require_value(args, "--user")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let sheet_url = match sheet_raw {
            None => None,
            Some(raw) => Some(
                SourceUrl::parse(&raw).map_err(|_| ArgsError::InvalidSheetUrl { raw })?,
            ),
        };

        Ok(Self {
            db_url,
            sheet_url,
            user,
        })
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

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;

    let identity: Arc<dyn IdentityProvider> =
        Arc::new(LocalIdentity::new(UserProfile::new(parsed.user)));
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::default_clock(),
        parsed.sheet_url,
        identity,
    )
    .await?
    .with_audio(Arc::new(WebviewAudio));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Case File")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
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

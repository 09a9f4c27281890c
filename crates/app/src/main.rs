use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use quiz_core::model::Question;
use services::{EngineConfig, default_bank};
use ui::{App, QuizApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPageSize { raw: String },
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPageSize { raw } => write!(f, "invalid --page-size value: {raw}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration-secs value: {raw}"),
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

struct DesktopQuizApp {
    questions: Vec<Question>,
    config: EngineConfig,
}

impl QuizApp for DesktopQuizApp {
    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn config(&self) -> EngineConfig {
        self.config
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

struct Args {
    config: EngineConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--page-size <n>] [--duration-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --page-size 5");
    eprintln!("  --duration-secs 300");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_PAGE_SIZE, QUIZ_DURATION_SECS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut page_size = std::env::var("QUIZ_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(EngineConfig::default().page_size);
        let mut duration_secs = std::env::var("QUIZ_DURATION_SECS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(EngineConfig::default().duration_secs);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--page-size" => {
                    let value = require_value(args, "--page-size")?;
                    page_size = value
                        .parse::<usize>()
                        .ok()
                        .filter(|parsed| *parsed > 0)
                        .ok_or(ArgsError::InvalidPageSize { raw: value })?;
                }
                "--duration-secs" => {
                    let value = require_value(args, "--duration-secs")?;
                    duration_secs = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidDuration { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config: EngineConfig {
                page_size,
                duration_secs,
            },
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn QuizApp> = Arc::new(DesktopQuizApp {
        questions: default_bank(),
        config: parsed.config,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

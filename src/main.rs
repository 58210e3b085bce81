use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url_qr::{QrError, config, generate, report};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "url-qr")]
#[command(about = "Generate a QR code image for a URL")]
#[command(long_about = "\
Generate a QR code image for a URL

Every setting can come from a flag, an environment variable, or a built-in
default, in that order of precedence:

  --url       QR_DATA_URL        https://github.com/AbhishekDuddupudi
  --dir       QR_CODE_DIR        output_qr
  --filename  QR_CODE_FILENAME   qr.png
  --fill      FILL_COLOR         black
  --back      BACK_COLOR         white

Environment variables may also be set in a .env file (see --env-file).

Colors take any CSS color: names, #rgb through #rrggbbaa, rgb(), hsl(),
or hsv(). Alpha is ignored.

Leaving the filename at qr.png writes qr_<YYYYMMDD_HHMMSS>.png so repeated
runs never collide. Any other filename is used as-is and overwritten.

The symbol uses error correction level H, 8px modules and a 2-module border.

Run 'url-qr gen-env' to print a documented .env file.")]
#[command(version = version_string())]
struct Cli {
    #[command(flatten)]
    config: config::ConfigArgs,

    /// Env file to load before resolving settings [default: .env, skipped if absent]
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate settings and show what would be written, without writing
    Check,
    /// Print a stock .env file with all settings documented
    GenEnv,
}

fn main() -> ExitCode {
    // Settings read their env vars while the command is built, so the env
    // file has to be in the environment before the real parse.
    let env_file = load_env_file(env_file_arg().as_deref());
    let cli = Cli::parse();

    if let Some(Command::GenEnv) = cli.command {
        print!("{}", config::stock_env_file());
        return ExitCode::SUCCESS;
    }

    init_logging();

    let result = env_file.and_then(|loaded| {
        if let Some(path) = loaded {
            info!("Loaded environment from {}", path.display());
        }
        run(&cli)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), QrError> {
    let config = config::EffectiveConfig::from(cli.config.clone());
    info!("Encoding {} into {}", config.url, config.output_dir.display());

    match cli.command {
        Some(Command::Check) => {
            let plan = generate::plan(&config, &chrono::Local::now())?;
            report::print_check_output(&config, &plan);
        }
        _ => {
            generate::generate(&config)?;
        }
    }

    Ok(())
}

/// Pull `--env-file` out of argv without validating anything else.
///
/// Usage errors are ignored here; the full parse in `main` reports them.
fn env_file_arg() -> Option<PathBuf> {
    Cli::command()
        .ignore_errors(true)
        .get_matches()
        .get_one::<PathBuf>("env_file")
        .cloned()
}

/// Seed the environment from `--env-file`, or from `.env` when present.
fn load_env_file(explicit: Option<&Path>) -> Result<Option<PathBuf>, QrError> {
    let path = explicit.unwrap_or(Path::new(config::DEFAULT_ENV_FILE));
    Ok(config::load_env_file(path, explicit.is_some())?)
}

/// Install the stdout subscriber: timestamp, level, message.
///
/// Level defaults to `info`; `RUST_LOG` overrides it.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();
}

//! Fuldmåne CLI - Is it full moon tonight?

use clap::Parser;
use fuldmaane_cli::commands::{self, Context};
use fuldmaane_cli::cli::ShowArgs;
use fuldmaane_cli::{Cli, Clock, Command, Config, Formatter, SystemClock};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> fuldmaane_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults when there is no usable file
    let config_path = match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::default_path(),
    };
    let mut config = Config::load_or_default(config_path.as_deref().ok());

    // Command-line flags win over the file
    if let Some(timezone) = cli.timezone {
        config.timezone = timezone;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(format) = cli.format {
        config.settings.format = format.into();
    }
    if cli.no_color {
        config.settings.color = false;
    }
    debug!(?config, "effective configuration");

    let formatter = Formatter::new(config.settings.format, config.settings.color);
    let clock = SystemClock;
    let mut stdout = std::io::stdout().lock();

    match cli
        .command
        .unwrap_or_else(|| Command::Show(ShowArgs::default()))
    {
        Command::Show(args) => {
            let ctx = context(&config, formatter, &clock)?;
            commands::execute_show(args, &ctx, &mut stdout)?;
        }
        Command::Upcoming(args) => {
            let ctx = context(&config, formatter, &clock)?;
            commands::execute_upcoming(args, config.settings.upcoming_count, &ctx, &mut stdout)?;
        }
        Command::Config(args) => {
            let path = config_path?;
            commands::execute_config(args, &config, &path, &formatter, &mut stdout)?;
        }
    }

    Ok(())
}

fn context<'a>(
    config: &Config,
    formatter: Formatter,
    clock: &'a dyn Clock,
) -> fuldmaane_cli::Result<Context<'a>> {
    Ok(Context {
        formatter,
        locale: config.locale,
        timezone: config.tz()?,
        clock,
    })
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

use clap::{Parser, builder::styling};
use std::process::ExitCode;
use supabase_extractor::{cli, storage::OUTPUT_FILE};

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Supabase Extractor: snapshot a project's tables and users into supabase_data_extract.json
#[derive(Parser)]
#[command(name = "supex", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source credentials from
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let dotenv = dotenvy::from_filename(&cli.env);

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .target(env_logger::Target::Stdout)
        .init();

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No {} file, using process environment", cli.env),
        Err(e) => {
            log::error!("Failed to load {}: {}", cli.env, e);
            return ExitCode::FAILURE;
        }
    }

    match cli::run(OUTPUT_FILE).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Extraction failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

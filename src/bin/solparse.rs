//! Print a readable summary of one Solana transaction
//!
//! Usage: solparse <SIGNATURE> [--json]
//!
//! Requires HELIUS_API_KEY (environment or .env).

use {
    solparse::{
        config::{self, Config},
        fetcher::HeliusFetcher,
        get_transaction_summary,
        render::SummaryReport,
        view::ViewState,
    },
    std::{env, process::ExitCode, time::Instant},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    config::init_logger();
    let config = Config::from_env()?;

    // NOTE: Workaround for rustls issue
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        log::debug!("Crypto provider already installed");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let input = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_default();

    let mut view = ViewState::with_input(input);
    let transaction_id = match view.submit(Instant::now()) {
        Ok(id) => id,
        Err(e) => {
            log::debug!("{}", e);
            print_banner(&view);
            eprintln!("Usage: solparse <SIGNATURE> [--json]");
            return Ok(ExitCode::from(2));
        }
    };

    log::debug!("Configuration: {:?}", config);
    let fetcher = HeliusFetcher::new(&config)?;

    let result = get_transaction_summary(&fetcher, &transaction_id).await;
    view.apply(&result, Instant::now());

    match result {
        Ok(summary) if as_json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(summary) => {
            print!("{}", SummaryReport::new(&summary));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("Lookup failed for {}: {}", transaction_id, e);
            print_banner(&view);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_banner(view: &ViewState) {
    if let Some(banner) = &view.error {
        eprintln!("{}", banner.message);
    }
}

use rirstats_csv::config::Config;
use rirstats_csv::diagnostics::LogDiagnostics;
use rirstats_csv::error::RirError;
use rirstats_csv::fetch::HttpFetcher;
use rirstats_csv::logging::init_logging;
use std::io::BufWriter;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing log4rs: {e}");
        return ExitCode::FAILURE;
    }
    log::info!("#Start main()");

    match try_main(&config).await {
        Ok(rows) => {
            log::info!("#End main() wrote {rows} rows");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(config: &Config) -> Result<usize, RirError> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    rirstats_csv::run(&fetcher, &config.sources, &mut out, &LogDiagnostics).await
}

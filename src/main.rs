use clap::Parser;
use std::process::ExitCode;

use zhizhu3d::cli::{self, Args};
use zhizhu3d::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_format, args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!("zhizhu3d {} ({})", zhizhu3d::VERSION, zhizhu3d::BUILD_DATE);

    let mut stdout = std::io::stdout().lock();
    match cli::run(&args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

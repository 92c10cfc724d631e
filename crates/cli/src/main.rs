use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use rtp_delay::{DelayConfig, analyze_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rtp-delay",
    version,
    about = "Mean and median offset between RTP timestamps and capture time"
)]
struct Args {
    /// Capture table: header line, then protocol,src,sport,dst,ssrc,rtp_ts,sec,usec,media_type rows
    #[arg(allow_hyphen_values = true)]
    file_path: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match analyze_file(&args.file_path, &DelayConfig::default()) {
        Ok(report) => {
            println!("{}", report.summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "delay computation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

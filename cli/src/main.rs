extern crate clap;
extern crate colored;
extern crate log;

use std::time::Duration;

use colored::*;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

mod banner;
use crate::banner::print_banner;

mod models;
use crate::models::smtp_args::SmtpArgs;

use clap::Parser;

use m3ucheck_core::checker;
use m3ucheck_core::error::CheckError;
use m3ucheck_core::models::report::SourceReport;
use m3ucheck_core::notify::mailer::SmtpMailer;
use m3ucheck_core::notify::Notifier;
use m3ucheck_core::tvh_conn::playlist_fetch::HttpPlaylistFetcher;
use m3ucheck_core::tvh_conn::tvh_conn::TvhConn;

/// Compares the M3U playlists of TVHeadend IPTV networks with their muxes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TVHeadend server address and port (e.g., 127.0.0.1:9981)
    #[arg(short, long, env = "TVH_SERVER")]
    server: String,

    /// Username for TVHeadend authentication
    #[arg(short, long, env = "TVH_USERNAME")]
    username: String,

    /// Password for TVHeadend authentication
    #[arg(short, long, env = "TVH_PASSWORD", hide_env_values = true)]
    password: String,

    /// Seconds to wait for a playlist download
    #[arg(long, default_value_t = 10)]
    playlist_timeout: u64,

    /// Seconds to wait for a TVHeadend API call
    #[arg(long, default_value_t = 30)]
    api_timeout: u64,

    #[command(flatten)]
    smtp: SmtpArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();
    print_banner();

    tokio::select! {
        result = execute(cli) => match result {
            Ok(reports) => print_reports(&reports),
            Err(err) => {
                error!("[!] Error during execution: {}", err);
                eprintln!("{} {}", "Error during execution:".red().bold(), err);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            warn!("[!] Execution was interrupted by signal.");
            eprintln!("{}", "Execution was interrupted by signal.".yellow());
        }
    }

    Ok(())
}

async fn execute(cli: Cli) -> Result<Vec<SourceReport>, CheckError> {
    let email_config = cli.smtp.into_email_config();
    match &email_config {
        Some(config) => debug!("[-] email notification enabled: {:?}", config),
        None => debug!("[-] email notification disabled"),
    }

    let backend = TvhConn::new(
        &cli.server,
        &cli.username,
        &cli.password,
        Duration::from_secs(cli.api_timeout),
    )?;
    let playlists = HttpPlaylistFetcher::new(Duration::from_secs(cli.playlist_timeout))?;

    let mailer = email_config.map(SmtpMailer::new);
    let notifier = mailer.as_ref().map(|m| m as &dyn Notifier);

    checker::run(&backend, &playlists, notifier).await
}

fn print_reports(reports: &[SourceReport]) {
    if reports.is_empty() {
        println!("{}", "[-] no network is fed from an M3U playlist".yellow());
        return;
    }

    for report in reports {
        println!(
            "{} {}",
            "network:".cyan().bold(),
            report.network_name().cyan()
        );

        if report.is_failure() {
            println!("  {}", report.to_string().red().bold());
            continue;
        }

        for line in report.to_string().lines() {
            println!("  {}", colorize(line));
        }
    }

    let failed = reports.iter().filter(|r| r.is_failure()).count();
    let changed = reports.iter().filter(|r| r.has_changes()).count();
    info!(
        "[+] checked {} playlist(s): {} changed, {} failed",
        reports.len(),
        changed,
        failed
    );
}

fn colorize(line: &str) -> ColoredString {
    match line.trim_start().chars().next() {
        Some('+') => line.green(),
        Some('-') => line.red(),
        Some('*') => line.yellow().bold(),
        _ if line.ends_with("streams:") => line.bold(),
        _ if line.starts_with("Results for playlist") => line.blue(),
        _ => line.normal(),
    }
}

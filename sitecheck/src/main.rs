use anyhow::{Context, Result};
use colored::Colorize;
use sitecheck::commands::command_argument_builder;
use sitecheck::handlers::{CheckOptions, handle_check, init_tracing};
use sitecheck_core::{ConsoleReporter, print_banner};
use sitecheck_scanner::HttpProbe;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();
    let options = CheckOptions::from_matches(&matches);

    if let Err(e) = run(options).await {
        eprintln!("{}", format!("[Error] {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run(options: CheckOptions) -> Result<()> {
    init_tracing(options.verbosity);

    if !options.quiet {
        print_banner();
    }

    let probe = HttpProbe::with_timeout(options.timeout).context("failed to build HTTP client")?;
    handle_check(&options, &probe, &ConsoleReporter::new()).await;

    Ok(())
}

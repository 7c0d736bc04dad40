use clap::ArgMatches;
use sitecheck_core::{Reporter, StatusColor, load_urls_from_file, process_urls};
use sitecheck_scanner::probe::DEFAULT_TIMEOUT_SECS;
use sitecheck_scanner::{CheckResult, StatusProbe};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{Level, info, warn};

/// Everything one invocation needs, pulled out of the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub list: Option<PathBuf>,
    pub urls: Vec<String>,
    pub output: Option<PathBuf>,
    pub timeout: Duration,
    pub quiet: bool,
    pub verbosity: u8,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            list: None,
            urls: Vec::new(),
            output: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            quiet: false,
            verbosity: 0,
        }
    }
}

impl CheckOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let timeout_secs = matches
            .get_one::<u64>("timeout")
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            list: matches.get_one::<String>("list").map(|p| expand_path(p)),
            urls: matches
                .get_many::<String>("url")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            output: matches.get_one::<String>("output").map(|p| expand_path(p)),
            timeout: Duration::from_secs(timeout_secs),
            quiet: matches.get_flag("quiet"),
            verbosity: matches.get_count("verbose"),
        }
    }
}

/// Expand a leading `~` the way a shell would.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the list-file batch and then the explicit-URL batch.
///
/// The two batches are independent: a missing list file is reported and
/// skipped, and the explicit URLs are still checked. Returns every result in
/// the order it was produced.
pub async fn handle_check<P, R>(
    options: &CheckOptions,
    probe: &P,
    reporter: &R,
) -> Vec<CheckResult>
where
    P: StatusProbe,
    R: Reporter,
{
    let output = options.output.as_deref();
    let mut results = Vec::new();

    if let Some(list_path) = &options.list {
        match load_urls_from_file(list_path) {
            Ok(urls) => {
                info!("Checking {} URL(s) from {}", urls.len(), list_path.display());
                results.extend(process_urls(probe, reporter, &urls, output).await);
            }
            Err(e) => {
                warn!("Skipping list file: {}", e);
                reporter.emit(&e.to_string(), StatusColor::Red);
            }
        }
    }

    if !options.urls.is_empty() {
        results.extend(process_urls(probe, reporter, &options.urls, output).await);
    }

    results
}

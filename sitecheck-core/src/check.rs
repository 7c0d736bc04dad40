// Single-URL checker and batch processor

use crate::classify::{StatusColor, classify};
use crate::output::append_reachable;
use crate::reporter::Reporter;
use sitecheck_scanner::{CheckOutcome, CheckResult, StatusProbe};
use std::path::Path;
use tracing::{debug, info, warn};

/// Render a check result as the line shown to the user, plus its color.
pub fn render_result(result: &CheckResult) -> (String, StatusColor) {
    let url = &result.url;
    match &result.outcome {
        CheckOutcome::Responded(status_code) => {
            let classification = classify(*status_code);
            (
                format!("[{}] {} {}", status_code, classification.explanation, url),
                classification.color,
            )
        }
        CheckOutcome::TimedOut => (
            format!("[Error] request timed out {}", url),
            StatusColor::Red,
        ),
        CheckOutcome::ConnectionFailed => (
            format!("[Error] connection error {}", url),
            StatusColor::Red,
        ),
        CheckOutcome::TooManyRedirects => (
            format!("[Error] too many redirects {}", url),
            StatusColor::Red,
        ),
        CheckOutcome::RequestFailed(details) => (
            format!("[Error] request exception {} [message] {}", url, details),
            StatusColor::Red,
        ),
    }
}

/// Check one URL, report it, and append it to `output` if it answered 200.
///
/// Never fails: request and write errors are reported and swallowed so the
/// caller can move on to the next URL.
pub async fn check_url<P, R>(
    probe: &P,
    reporter: &R,
    url: &str,
    output: Option<&Path>,
) -> CheckResult
where
    P: StatusProbe,
    R: Reporter,
{
    debug!("Checking {}", url);
    let result = CheckResult::from_probe(url.to_string(), probe.fetch_status(url).await);

    let (line, color) = render_result(&result);
    reporter.emit(&line, color);

    if result.is_reachable()
        && let Some(path) = output
        && let Err(e) = append_reachable(path, url)
    {
        warn!("Failed to append {} to {}: {}", url, path.display(), e);
        reporter.emit(
            &format!("[Error] failed to write {} {}", path.display(), e),
            StatusColor::Red,
        );
    }

    result
}

/// Check every URL in order, one at a time.
pub async fn process_urls<P, R>(
    probe: &P,
    reporter: &R,
    urls: &[String],
    output: Option<&Path>,
) -> Vec<CheckResult>
where
    P: StatusProbe,
    R: Reporter,
{
    info!("Checking {} URL(s)", urls.len());

    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        results.push(check_url(probe, reporter, url, output).await);
    }

    let reachable = results.iter().filter(|r| r.is_reachable()).count();
    info!("Batch complete: {}/{} reachable", reachable, results.len());
    results
}

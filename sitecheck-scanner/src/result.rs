use crate::error::ProbeError;

/// What happened when a URL was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The server answered with this status code
    Responded(u16),
    TimedOut,
    /// DNS failure, refused connection, unreachable network
    ConnectionFailed,
    TooManyRedirects,
    /// Any other request-layer failure, with its description
    RequestFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub url: String,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn new(url: String, outcome: CheckOutcome) -> Self {
        Self { url, outcome }
    }

    pub fn from_probe(url: String, probe: Result<u16, ProbeError>) -> Self {
        let outcome = match probe {
            Ok(status_code) => CheckOutcome::Responded(status_code),
            Err(ProbeError::Timeout) => CheckOutcome::TimedOut,
            Err(ProbeError::Connection(_)) => CheckOutcome::ConnectionFailed,
            Err(ProbeError::TooManyRedirects) => CheckOutcome::TooManyRedirects,
            Err(ProbeError::Request(details)) => CheckOutcome::RequestFailed(details),
        };
        Self { url, outcome }
    }

    /// Only an HTTP 200 counts as reachable.
    pub fn is_reachable(&self) -> bool {
        self.outcome == CheckOutcome::Responded(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_probe_maps_every_error() {
        let url = "http://a.test".to_string();
        let cases = vec![
            (Ok(404), CheckOutcome::Responded(404)),
            (Err(ProbeError::Timeout), CheckOutcome::TimedOut),
            (
                Err(ProbeError::Connection("refused".to_string())),
                CheckOutcome::ConnectionFailed,
            ),
            (Err(ProbeError::TooManyRedirects), CheckOutcome::TooManyRedirects),
            (
                Err(ProbeError::Request("bad".to_string())),
                CheckOutcome::RequestFailed("bad".to_string()),
            ),
        ];

        for (probe, expected) in cases {
            let result = CheckResult::from_probe(url.clone(), probe);
            assert_eq!(result.url, url);
            assert_eq!(result.outcome, expected);
        }
    }

    #[test]
    fn test_is_reachable_only_for_200() {
        let ok = CheckResult::new("u".to_string(), CheckOutcome::Responded(200));
        assert!(ok.is_reachable());

        for outcome in [
            CheckOutcome::Responded(201),
            CheckOutcome::Responded(301),
            CheckOutcome::TimedOut,
            CheckOutcome::ConnectionFailed,
        ] {
            assert!(!CheckResult::new("u".to_string(), outcome).is_reachable());
        }
    }
}

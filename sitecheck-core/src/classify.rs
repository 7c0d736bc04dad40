// Status code classification

/// Display color attached to a classified result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Green,
    Blue,
    Yellow,
    Red,
    Magenta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub explanation: &'static str,
    pub color: StatusColor,
}

pub const UNKNOWN: Classification = Classification {
    explanation: "unknown status code",
    color: StatusColor::Magenta,
};

const STATUS_TABLE: &[(u16, &str, StatusColor)] = &[
    (200, "reachable", StatusColor::Green),
    (301, "permanent redirect", StatusColor::Blue),
    (302, "temporary redirect", StatusColor::Blue),
    (400, "bad request", StatusColor::Yellow),
    (401, "unauthorized", StatusColor::Yellow),
    (403, "forbidden", StatusColor::Yellow),
    (404, "not found", StatusColor::Yellow),
    (500, "server error", StatusColor::Red),
    (503, "service unavailable", StatusColor::Red),
];

/// Look up the explanation and color for a status code.
///
/// Codes missing from the table fall back to [`UNKNOWN`].
pub fn classify(status_code: u16) -> Classification {
    STATUS_TABLE
        .iter()
        .find(|(code, _, _)| *code == status_code)
        .map(|&(_, explanation, color)| Classification { explanation, color })
        .unwrap_or(UNKNOWN)
}

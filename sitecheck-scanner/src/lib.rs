pub mod error;
pub mod probe;
pub mod result;

pub use error::ProbeError;
pub use probe::{HttpProbe, StatusProbe};
pub use result::{CheckOutcome, CheckResult};

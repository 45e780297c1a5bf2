pub mod status;

pub use status::{Severity, StatusRecord, current_timestamp};

#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod ports;
pub mod report;
pub mod snapshot;
pub mod timestamp;
pub mod version;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use ports::{EnvironmentProbe, ProbeError, ProbeResult};
pub use report::{Report, SEPARATOR_WIDTH, TITLE, separator};
pub use snapshot::{EnvironmentSnapshot, PlatformDescriptor, capture};
pub use timestamp::{format_iso8601, parse_iso8601};
pub use version::first_token;

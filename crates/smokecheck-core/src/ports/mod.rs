//! Port definitions (trait abstractions) for host facilities.
//!
//! Ports define what the core expects from the environment. They contain no
//! implementation details and use only domain types.

pub mod environment_probe;

pub use environment_probe::{EnvironmentProbe, ProbeError, ProbeResult};

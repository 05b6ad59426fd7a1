//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Read what they need through the probe port
//! 2. Call core rendering
//! 3. Write output for the terminal

pub mod report;

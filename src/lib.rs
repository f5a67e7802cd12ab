//! Styling automation for menswear outfit templates.
//!
//! The crate centers on the `workflows::styling` module, which derives
//! tucking and buttoning policies for every layer slot of a stored outfit
//! template collection. The remaining modules supply the service shell:
//! environment-driven configuration, tracing setup, and the application
//! error type shared by the CLI and HTTP surfaces.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

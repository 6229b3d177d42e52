//! Observability for cxxdeps.
//! `tracing` crate with `EnvFilter`, filter from `CXXDEPS_LOG` or CLI verbosity.

pub mod setup;

pub use setup::{init_tracing, Verbosity};

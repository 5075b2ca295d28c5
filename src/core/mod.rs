//! Core components of the `coincap-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`CcClient`] and its builder.
//! - The [`NetworkError`] taxonomy and the [`NetResult`] alias.
//! - URL construction and the two-stage request classifiers.
//! - The [`CoinDataSource`] capability trait.

/// The main client (`CcClient`), builder, and configuration.
pub mod client;
/// Timestamp conversions between epoch milliseconds and `chrono`.
pub mod conversions;
/// Resolution of request paths against the base URL.
pub mod endpoint;
/// Error types: `NetworkError` for calls, `CcError` for client construction.
pub mod error;
/// Transport and response classifiers.
pub mod net;
/// The `NetResult` alias and chaining hooks.
pub mod result;
/// Service trait abstracting the data source.
pub mod services;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::CcClient`
pub use client::{CcClient, CcClientBuilder};
pub use error::{CcError, NetworkError};
pub use result::{NetResult, ResultExt};
pub use services::CoinDataSource;

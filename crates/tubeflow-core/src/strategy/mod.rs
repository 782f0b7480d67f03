//! Strategy documents and the client that requests them.

mod client;
mod document;
mod error;

pub use client::{StrategyClient, parse_document};
pub use document::{Section, StrategyDocument};
pub use error::{StrategyError, UpstreamErrorKind};

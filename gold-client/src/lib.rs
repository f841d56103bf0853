//! Gold Client - digital gold chat & purchase page controller
//!
//! Browser-side controller for the gold investment assistant, compiled to
//! WebAssembly and loaded by the page shell `page-worker` serves.
//!
//! # Architecture
//! - `controller`: message-driven state machine, no I/O
//! - `runtime`: event channel plus in-flight request set feeding the controller
//! - `client`: chatbot backend REST client (reqwest on browser fetch)
//! - `view`: rendering seam; `dom` implements it with web-sys on wasm32
//!
//! # Features
//! - Chat with a typing placeholder and call-to-action replies
//! - Live purchase quote with GST and grams
//! - Validated purchases with a success summary
//! - Price ticker, analytics, market and portfolio sections
//! - INR and USD deployment profiles

// Clippy configuration for display and money formatting
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Messages are consumed by value
#![allow(clippy::if_not_else)] // Readability preference
#![allow(clippy::map_unwrap_or)] // Explicit fallback preference
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod purchase;
pub mod quote;
pub mod runtime;
pub mod section;
pub mod session;
pub mod types;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
mod testing;

pub use client::{GoldApi, HttpClient};
pub use config::{Config, Profile};
pub use controller::{ClientState, Command, Controller, Msg};
pub use error::{ClientError, Result, ValidationError};
pub use section::Section;
pub use session::SessionId;
pub use types::*;
pub use view::{Capabilities, View};

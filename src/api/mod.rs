//! qBittorrent Web UI API module.
//!
//! This module provides:
//! - HTTP client holding the Web UI session cookie
//! - API response types

pub mod client;
pub mod types;

pub use client::{QbitClient, LOGIN_SUCCESS_BODY};
pub use types::*;

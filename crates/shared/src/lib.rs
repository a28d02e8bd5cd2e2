//! Shared types and utilities for the plant catalog client.
//!
//! Everything here is platform-free so the image intake pipeline can be
//! exercised without a browser.

pub mod data_url;
pub mod error;
pub mod i18n;
pub mod intake;
pub mod models;
pub mod notify;

pub use data_url::*;
pub use error::*;
pub use i18n::*;
pub use intake::*;
pub use models::*;
pub use notify::*;

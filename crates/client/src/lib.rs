//! Plant catalog client - Dioxus web application
//!
//! Renders the plant catalog: a grid of plant cards that can replace their
//! image from a local file or ask the catalog to delete them.

#[macro_use]
pub mod logging;

pub mod components;
pub mod i18n;
pub mod toast;
pub mod views;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

pub use components::plant::PlantCard;
pub use i18n::{use_language, LanguageContext, LanguageProvider, LanguageSelector};
pub use toast::{use_toast, ToastContext, ToastProvider};
pub use views::PlantCatalog;

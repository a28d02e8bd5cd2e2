//! Reusable components.

pub mod plant;
pub mod ui;

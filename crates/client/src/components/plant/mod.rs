//! Plant catalog components.
//!
//! - `PlantCard`: one catalog entry with change-image and delete actions
//! - `DeleteConfirmDialog`: confirmation overlay shown by the catalog before deleting

mod delete_dialog;
mod plant_card;

pub use delete_dialog::DeleteConfirmDialog;
pub use plant_card::{PlantCard, PlantCardProps};

//! Shared data models for the plant catalog.

use serde::{Deserialize, Serialize};

/// A single catalog entry as rendered by a plant card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Either a remote URL or a `data:` URL produced by an image replacement.
    pub image: String,
    /// Free-form hint describing the image, exposed as `data-ai-hint`.
    #[serde(default)]
    pub ai_hint: String,
    #[serde(default)]
    pub description: String,
    /// Category label shown in the card badge.
    #[serde(rename = "type")]
    pub plant_type: String,
}

/// Parse a JSON array of plants.
pub fn parse_catalog(json: &str) -> Result<Vec<Plant>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Replace the image of the plant with `id`. Returns `false` when no such plant exists.
pub fn replace_plant_image(plants: &mut [Plant], id: &str, image: String) -> bool {
    match plants.iter_mut().find(|p| p.id == id) {
        Some(plant) => {
            plant.image = image;
            true
        }
        None => false,
    }
}

/// Remove and return the plant with `id`.
pub fn remove_plant(plants: &mut Vec<Plant>, id: &str) -> Option<Plant> {
    let index = plants.iter().position(|p| p.id == id)?;
    Some(plants.remove(index))
}

//! Plant catalog view - owns the plant list and applies card requests to it.

use dioxus::prelude::*;
use plant_catalog_shared::{
    keys, parse_catalog, remove_plant, replace_plant_image, Plant, Toast, Translate,
};

use crate::components::plant::{DeleteConfirmDialog, PlantCard};
use crate::components::ui::Badge;
use crate::i18n::{use_language, LanguageSelector};
use crate::toast::use_toast;

const SEED_CATALOG: &str = include_str!("../../assets/plants.json");

fn seed_catalog() -> Vec<Plant> {
    match parse_catalog(SEED_CATALOG) {
        Ok(plants) => plants,
        Err(e) => {
            log_error!("failed to parse seed catalog: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn PlantCatalog() -> Element {
    let language = use_language();
    let toasts = use_toast();
    let mut plants = use_signal(seed_catalog);
    let mut pending_delete = use_signal(|| None::<String>);

    let count = plants.read().len();
    let pending_plant = pending_delete
        .read()
        .as_ref()
        .and_then(|id| plants.read().iter().find(|p| &p.id == id).cloned());

    rsx! {
        div { class: "mx-auto max-w-6xl px-6 py-10 space-y-8",
            header { class: "flex items-center justify-between gap-4",
                div { class: "flex items-center gap-3",
                    h1 { class: "font-headline text-3xl font-bold text-white",
                        {language.t(keys::CATALOG_TITLE)}
                    }
                    Badge { "{count}" }
                }
                LanguageSelector {}
            }

            if plants.read().is_empty() {
                p { class: "text-gray-400", {language.t(keys::CATALOG_EMPTY)} }
            } else {
                div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for plant in plants.read().iter().cloned() {
                        PlantCard {
                            key: "{plant.id}",
                            id: plant.id.clone(),
                            name: plant.name,
                            image: plant.image,
                            ai_hint: plant.ai_hint,
                            description: plant.description,
                            plant_type: plant.plant_type,
                            on_image_change: move |(id, image): (String, String)| {
                                if !replace_plant_image(&mut plants.write(), &id, image) {
                                    log_warn!("image change for unknown plant {}", id);
                                }
                            },
                            on_delete_request: move |id: String| pending_delete.set(Some(id)),
                        }
                    }
                }
            }

            if let Some(plant) = pending_plant {
                DeleteConfirmDialog {
                    plant_name: plant.name.clone(),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        match remove_plant(&mut plants.write(), &plant.id) {
                            Some(removed) => {
                                log_info!("deleted plant {}", removed.id);
                                toasts.push(Toast::new(language.t(keys::PLANT_DELETED_TITLE)));
                            }
                            None => log_warn!("delete for unknown plant {}", plant.id),
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

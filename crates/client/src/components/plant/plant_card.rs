//! Plant card component - image, name, type badge and description for one plant.

use std::rc::Rc;

use dioxus::prelude::*;
use plant_catalog_shared::{keys, IntakeMachine, IntakeState, PickedFile, Translate};

use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardDescription, CardFooter,
    CardHeader, CardTitle, TrashIcon, UploadIcon,
};
use crate::i18n::use_language;
use crate::toast::use_toast;

#[derive(Props, Clone, PartialEq)]
pub struct PlantCardProps {
    pub id: String,
    pub name: String,
    /// Remote URL or `data:` URL.
    pub image: String,
    pub ai_hint: String,
    pub description: String,
    pub plant_type: String,
    /// Called with `(id, data_url)` after a picked image has been read.
    pub on_image_change: EventHandler<(String, String)>,
    pub on_delete_request: EventHandler<String>,
}

/// PlantCard - one catalog entry.
///
/// ```text
/// +-----------------------------------+
/// |            [  image  ]            |
/// |  Monstera Deliciosa      [Indoor] |
/// |  Large split leaves...            |
/// |  [Change Image]   [Delete]        |
/// +-----------------------------------+
/// ```
///
/// The card owns no plant data. "Change Image" opens a hidden file input; the
/// picked file is validated and read as a data URL, then handed to
/// `on_image_change`. "Delete" forwards the id to `on_delete_request`.
#[component]
pub fn PlantCard(props: PlantCardProps) -> Element {
    let toasts = use_toast();
    let language = use_language();
    let mut file_input = use_signal(|| None::<Rc<MountedData>>);

    let input_dom_id = format!("plant-card-image-{}", props.id);

    let open_picker = {
        let dom_id = input_dom_id.clone();
        move |_: MouseEvent| match file_input.read().as_ref() {
            Some(input) => open_file_picker(input, &dom_id),
            None => log_warn!("file input for {} is not mounted", dom_id),
        }
    };

    let handle_file_change = {
        let id = props.id.clone();
        let dom_id = input_dom_id.clone();
        let on_image_change = props.on_image_change;
        move |evt: FormEvent| {
            let id = id.clone();
            let dom_id = dom_id.clone();
            let selection = evt.files().into_iter().next().map(|file| {
                let name = file.name();
                let mime = file.content_type();
                PickedFile::new(name, mime, move || async move {
                    file.read_bytes().await.map(|bytes| bytes.to_vec())
                })
            });

            async move {
                let file_name = selection.as_ref().map(|f| f.name().to_string());
                let mut machine = IntakeMachine::new();
                let state = machine
                    .run(&id, selection, &toasts, &language, |id, data_url| {
                        log_info!("{}: new image ({} chars)", id, data_url.len());
                        on_image_change.call((id.to_string(), data_url));
                    })
                    .await;

                match (state, machine.last_error()) {
                    (IntakeState::Idle, _) => log_debug!("{}: file picker dismissed", id),
                    (_, Some(err)) => {
                        log_warn!("{}: {:?}: {}", id, file_name.unwrap_or_default(), err)
                    }
                    _ => {}
                }

                // Allow the same file to be picked again.
                if let Some(input) = file_input.peek().as_ref() {
                    reset_file_input(input, &dom_id);
                }
            }
        }
    };

    let delete = {
        let id = props.id.clone();
        let on_delete_request = props.on_delete_request;
        move |_: MouseEvent| {
            log_info!("{}: delete requested", id);
            on_delete_request.call(id.clone());
        }
    };

    rsx! {
        Card { class: "flex flex-col",
            CardHeader { class: "flex-grow",
                div { class: "aspect-video relative -mt-6 -mx-6 mb-4 overflow-hidden shadow-lg",
                    img {
                        class: "absolute inset-0 w-full h-full object-cover",
                        src: "{props.image}",
                        alt: "{props.name}",
                        "data-ai-hint": "{props.ai_hint}",
                    }
                }
                div { class: "flex justify-between items-start gap-2",
                    CardTitle { class: "font-headline", "{props.name}" }
                    Badge {
                        variant: BadgeVariant::Secondary,
                        class: "whitespace-nowrap shrink-0",
                        "{props.plant_type}"
                    }
                }
                CardDescription { "{props.description}" }
            }
            CardFooter { class: "grid grid-cols-2 gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    class: "w-full",
                    onclick: open_picker,
                    UploadIcon { class: "mr-2 h-4 w-4" }
                    {language.t(keys::PLANT_CARD_CHANGE_IMAGE)}
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Sm,
                    class: "w-full",
                    onclick: delete,
                    TrashIcon { class: "mr-2 h-4 w-4" }
                    {language.t(keys::PLANT_CARD_DELETE)}
                }
                input {
                    id: "{input_dom_id}",
                    class: "hidden",
                    r#type: "file",
                    accept: "image/*",
                    onmounted: move |evt: MountedEvent| file_input.set(Some(evt.data())),
                    onchange: handle_file_change,
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_file_picker(input: &MountedData, dom_id: &str) {
    use wasm_bindgen::JsCast;

    match input
        .downcast::<web_sys::Element>()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlElement>())
    {
        Some(el) => el.click(),
        None => log_warn!("{} is not an html element", dom_id),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_file_picker(_input: &MountedData, dom_id: &str) {
    run_dom_script("open file picker", dom_id, open_picker_script(dom_id));
}

#[cfg(target_arch = "wasm32")]
fn reset_file_input(input: &MountedData, _dom_id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = input
        .downcast::<web_sys::Element>()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>())
    {
        el.set_value("");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn reset_file_input(_input: &MountedData, dom_id: &str) {
    run_dom_script("reset file input", dom_id, reset_input_script(dom_id));
}

#[cfg(not(target_arch = "wasm32"))]
fn open_picker_script(dom_id: &str) -> String {
    format!("document.getElementById({:?})?.click();", dom_id)
}

#[cfg(not(target_arch = "wasm32"))]
fn reset_input_script(dom_id: &str) -> String {
    format!(
        "const el = document.getElementById({:?}); if (el) el.value = '';",
        dom_id
    )
}

#[cfg(not(target_arch = "wasm32"))]
async fn eval_dom_script(script: &str) -> Result<(), document::EvalError> {
    document::eval(script).await.map(|_| ())
}

/// Evaluate `script` in the background, logging if the renderer rejects it.
#[cfg(not(target_arch = "wasm32"))]
fn run_dom_script(action: &'static str, dom_id: &str, script: String) {
    let dom_id = dom_id.to_string();
    spawn(async move {
        if let Err(e) = eval_dom_script(&script).await {
            log_warn!("{} for {} failed: {}", action, dom_id, e);
        }
    });
}

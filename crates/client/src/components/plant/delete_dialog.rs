//! Delete confirmation dialog - modal overlay asking before a plant is removed.

use dioxus::prelude::*;
use plant_catalog_shared::{keys, Translate};

use crate::components::ui::{Button, ButtonVariant};
use crate::i18n::use_language;

#[component]
pub fn DeleteConfirmDialog(
    plant_name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let language = use_language();

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-sm",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "w-full max-w-md rounded-xl border border-[#3f4147] bg-[#2b2d31] p-6 shadow-2xl space-y-4",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "text-lg font-bold text-white",
                    {language.t(keys::DELETE_CONFIRM_TITLE)}
                }
                p { class: "text-sm font-semibold text-gray-200", "{plant_name}" }
                p { class: "text-sm text-gray-400",
                    {language.t(keys::DELETE_CONFIRM_DESCRIPTION)}
                }
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_cancel.call(()),
                        {language.t(keys::CANCEL)}
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_confirm.call(()),
                        {language.t(keys::DELETE_CONFIRM_ACTION)}
                    }
                }
            }
        }
    }
}

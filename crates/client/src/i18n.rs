//! Language context with localStorage persistence.

use dioxus::prelude::*;
use plant_catalog_shared::{keys, Language, Translate};

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "plant_catalog_language";

/// Language context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct LanguageContext {
    pub language: Signal<Language>,
}

impl LanguageContext {
    pub fn current(&self) -> Language {
        *self.language.read()
    }

    pub fn set(&self, language: Language) {
        let mut signal = self.language;
        signal.set(language);
    }
}

impl Translate for LanguageContext {
    fn t(&self, key: &str) -> String {
        self.language.read().translate(key)
    }
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
}

#[cfg(target_arch = "wasm32")]
fn load_language() -> Option<Language> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(STORAGE_KEY).ok()??;
    Language::from_code(&code)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_language() -> Option<Language> {
    None
}

#[cfg(target_arch = "wasm32")]
fn store_language(language: Language) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, language.code());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_language(_language: Language) {}

/// Provider component that sets up the language context
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let language = use_signal(|| load_language().unwrap_or_default());

    use_effect(move || {
        let current = *language.read();
        log_debug!("language set to {}", current.code());
        store_language(current);
    });

    use_context_provider(|| LanguageContext { language });

    rsx! { {children} }
}

/// Dropdown for switching the UI language.
#[component]
pub fn LanguageSelector() -> Element {
    let ctx = use_language();
    let current = ctx.current();

    rsx! {
        label { class: "flex items-center gap-2 text-sm text-gray-400",
            {ctx.t(keys::LANGUAGE_LABEL)}
            select {
                class: "rounded-lg bg-[#1e1f22] text-gray-100 px-3 py-1.5 border border-[#3f4147] focus:outline-none focus:ring-2 focus:ring-indigo-500/50",
                value: current.code(),
                onchange: move |e: FormEvent| {
                    if let Some(language) = Language::from_code(&e.value()) {
                        ctx.set(language);
                    }
                },
                for (code, name) in Language::ALL.map(|l| (l.code(), l.native_name())) {
                    option {
                        key: "{code}",
                        value: code,
                        selected: code == current.code(),
                        "{name}"
                    }
                }
            }
        }
    }
}

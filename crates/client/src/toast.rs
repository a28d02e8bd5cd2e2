//! Toast notifications: a context for raising them and a viewport that shows them.

use std::time::Duration;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use plant_catalog_shared::{keys, Notifier, Toast, ToastVariant, Translate};

use crate::components::ui::XIcon;
use crate::i18n::use_language;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts kept on screen; the oldest is dropped first.
const TOAST_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Copy, Debug)]
pub struct ToastContext {
    pub toasts: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    /// Show a toast and schedule its dismissal. Returns the toast id.
    pub fn push(&self, toast: Toast) -> u64 {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        {
            let mut list = toasts.write();
            list.push(ActiveToast { id, toast });
            let overflow = list.len().saturating_sub(TOAST_LIMIT);
            list.drain(..overflow);
        }

        // Owned by the root scope so the timer survives the component that raised the toast.
        let ctx = *self;
        spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            ctx.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Destructive => log_warn!("toast: {}", toast.title),
            ToastVariant::Default => log_debug!("toast: {}", toast.title),
        }
        self.push(toast);
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Provides [`ToastContext`] to its children and renders the toast stack above them.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| ToastContext { toasts, next_id });

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let ctx = use_toast();
    let language = use_language();
    let dismiss_label = language.t(keys::TOAST_DISMISS);

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm",
            for ActiveToast { id, toast } in ctx.toasts.read().clone() {
                div {
                    key: "{id}",
                    role: "status",
                    class: match toast.variant {
                        ToastVariant::Default => "relative rounded-lg border border-[#3f4147] bg-[#2b2d31] p-4 pr-10 shadow-lg text-white",
                        ToastVariant::Destructive => "relative rounded-lg border border-red-700 bg-red-600 p-4 pr-10 shadow-lg text-white",
                    },
                    p { class: "text-sm font-semibold", "{toast.title}" }
                    if let Some(description) = &toast.description {
                        p { class: "mt-1 text-sm opacity-90", "{description}" }
                    }
                    button {
                        class: "absolute top-2 right-2 rounded p-1 opacity-70 hover:opacity-100",
                        r#type: "button",
                        title: "{dismiss_label}",
                        onclick: move |_| ctx.dismiss(id),
                        XIcon { class: "h-4 w-4" }
                    }
                }
            }
        }
    }
}

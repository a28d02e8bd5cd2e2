use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

#[component]
pub fn Badge(
    #[props(optional)] variant: Option<BadgeVariant>,
    #[props(optional)] class: Option<String>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold";
    let variant_class = match variant.unwrap_or_default() {
        BadgeVariant::Default => "bg-emerald-600 text-white",
        BadgeVariant::Secondary => "bg-[#3f4147] text-gray-200",
    };
    let class = match class {
        Some(extra) if !extra.is_empty() => format!("{} {} {}", base, variant_class, extra),
        _ => format!("{} {}", base, variant_class),
    };

    rsx! {
        span { class, {children} }
    }
}

use dioxus::prelude::*;

fn with_extra(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = with_extra(
        "rounded-xl border border-[#2d2f34] bg-[#2b2d31] shadow-xl overflow-hidden",
        props.class,
    );

    rsx! {
        div { class, {props.children} }
    }
}

#[component]
pub fn CardHeader(#[props(optional)] class: Option<String>, children: Element) -> Element {
    let class = with_extra("flex flex-col gap-2 px-6 pt-6 pb-2", class);

    rsx! {
        div { class, {children} }
    }
}

#[component]
pub fn CardTitle(#[props(optional)] class: Option<String>, children: Element) -> Element {
    let class = with_extra("text-xl font-bold text-white leading-tight", class);

    rsx! {
        h3 { class, {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "text-sm text-gray-400", {children} }
    }
}

#[component]
pub fn CardFooter(#[props(optional)] class: Option<String>, children: Element) -> Element {
    let class = with_extra("flex items-center px-6 pb-6 pt-2", class);

    rsx! {
        div { class, {children} }
    }
}

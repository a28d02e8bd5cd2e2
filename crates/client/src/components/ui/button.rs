use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub size: Option<ButtonSize>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let disabled = props.disabled.unwrap_or(false);

    let base = "inline-flex items-center justify-center rounded-lg font-semibold transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-[#1e1f22] disabled:opacity-50 disabled:pointer-events-none";

    let size_class = match props.size.unwrap_or_default() {
        ButtonSize::Default => "px-4 py-2 text-sm",
        ButtonSize::Sm => "px-3 py-1.5 text-xs",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-emerald-500 to-teal-600 text-white hover:from-emerald-400 hover:to-teal-500 hover:shadow-lg hover:shadow-emerald-500/25 focus:ring-emerald-500",
        ButtonVariant::Secondary => "bg-[#4e5058] text-white hover:bg-[#6d6f78] focus:ring-gray-500",
        ButtonVariant::Outline => "border border-[#4e5058] bg-transparent text-gray-200 hover:bg-[#3f4147] hover:text-white focus:ring-gray-500",
        ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-500 focus:ring-red-500",
        ButtonVariant::Ghost => "bg-transparent text-gray-300 hover:bg-[#3f4147] hover:text-white focus:ring-gray-500",
    };

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {} {} {}", base, size_class, variant_class, extra),
        _ => format!("{} {} {}", base, size_class, variant_class),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

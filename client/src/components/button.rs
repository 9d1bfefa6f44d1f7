//! Clipped call-to-action button shared by the navbar and hero.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

const BASE_CLASS: &str = "font-black uppercase tracking-widest px-8 py-4 transition-all duration-200 transform hover:scale-105 active:scale-95 flex items-center justify-center gap-2 clip-button";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-brand-yellow text-brand-black hover:bg-white",
            ButtonVariant::Secondary => {
                "bg-brand-gray border border-white/20 text-white hover:border-brand-yellow hover:text-brand-yellow"
            }
            ButtonVariant::Danger => "bg-brand-red text-white hover:bg-red-700",
            ButtonVariant::Outline => {
                "bg-transparent border-2 border-brand-yellow text-brand-yellow hover:bg-brand-yellow hover:text-brand-black"
            }
        }
    }
}

/// Full class list for a button: base, variant, then caller overrides.
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let mut class = format!("{BASE_CLASS} {}", variant.class());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, &class)>
            {children()}
        </button>
    }
}

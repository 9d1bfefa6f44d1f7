use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::section_heading::SectionHeading;
use crate::content::{FEATURES, FEATURES_ANCHOR, Feature};

/// Three-card feature grid anchored at `#features`.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="py-24 bg-brand-gray relative border-t border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading subtitle="No More Excuses">"Built Different"</SectionHeading>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(feature_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn feature_card(feature: &'static Feature) -> impl IntoView {
    let badge_class = format!("w-12 h-12 {} flex items-center justify-center mb-6 clip-button", feature.accent);
    view! {
        <div class="bg-brand-black p-8 border border-white/10 hover:border-brand-yellow/50 transition-colors group relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-brand-yellow/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
            <div class=badge_class>
                <IconSvg icon=feature.icon class=feature.icon_class/>
            </div>
            <h3 class="text-xl font-black italic uppercase mb-4 text-white group-hover:text-brand-yellow transition-colors">
                {feature.title}
            </h3>
            <p class="text-white/60 leading-relaxed font-medium">{feature.description}</p>
        </div>
    }
}

use leptos::prelude::*;

/// Centered section title with an optional kicker line above it.
#[component]
pub fn SectionHeading(#[prop(optional)] subtitle: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            {subtitle.map(|text| {
                view! {
                    <span class="text-brand-yellow font-bold tracking-[0.2em] text-sm uppercase block mb-2">
                        {text}
                    </span>
                }
            })}
            <h2 class="text-4xl md:text-5xl font-black italic uppercase tracking-tight text-white">
                {children()}
            </h2>
        </div>
    }
}

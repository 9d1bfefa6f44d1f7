//! Closing call-to-action. Both buttons are inert placeholders.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};

const DOT_BACKGROUND: &str = "background-image: radial-gradient(#000 1px, transparent 1px); background-size: 20px 20px";

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="py-32 bg-brand-yellow text-brand-black relative overflow-hidden">
            <div class="absolute inset-0 opacity-10" style=DOT_BACKGROUND></div>

            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <h2 class="text-6xl md:text-8xl font-black italic uppercase tracking-tighter mb-8 leading-none">
                    "Ready to "
                    <br/>
                    "Lock In?"
                </h2>
                <p class="text-xl md:text-2xl font-bold uppercase tracking-wide mb-12 opacity-80 max-w-2xl mx-auto">
                    "No more coddling. No more gentle reminders. Just results."
                </p>

                <div class="flex flex-col sm:flex-row justify-center gap-6">
                    <button
                        type="button"
                        class="bg-black text-white px-10 py-5 font-black uppercase tracking-widest text-lg hover:scale-105 transition-transform shadow-2xl clip-button flex items-center justify-center gap-3"
                    >
                        <IconSvg icon=Icon::Smartphone size=24/>
                        "Download iOS"
                    </button>
                    <button
                        type="button"
                        class="bg-transparent border-4 border-black text-black px-10 py-5 font-black uppercase tracking-widest text-lg hover:bg-black hover:text-brand-yellow transition-colors clip-button"
                    >
                        "Read Manifesto"
                    </button>
                </div>

                <p class="mt-8 text-xs font-bold uppercase tracking-[0.2em] opacity-60">
                    "Available on App Store & Play Store"
                </p>
            </div>
        </section>
    }
}

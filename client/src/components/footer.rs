use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::content::{BRAND_NAME, COPYRIGHT, FOOTER_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-brand-black border-t border-white/10 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-8">
                    <div class="flex items-center gap-2">
                        <IconSvg icon=Icon::Lock class="w-6 h-6 text-brand-yellow"/>
                        <span class="font-black text-xl italic text-white tracking-tighter">{BRAND_NAME}</span>
                    </div>

                    <div class="flex gap-8 text-sm font-bold uppercase tracking-widest text-white/40">
                        {FOOTER_LINKS
                            .iter()
                            .map(|label| view! { <a href="#" class="hover:text-white transition-colors">{*label}</a> })
                            .collect_view()}
                    </div>

                    <div class="text-white/20 text-xs font-mono">{COPYRIGHT}</div>
                </div>
            </div>
        </footer>
    }
}

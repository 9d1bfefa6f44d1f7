use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::section_heading::SectionHeading;
use crate::content::{RANKS, RANKS_ANCHOR, Rank};

/// Rank ladder anchored at `#ranks`.
#[component]
pub fn Gamification() -> impl IntoView {
    view! {
        <section id=RANKS_ANCHOR class="py-24 bg-brand-gray border-t border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading subtitle="Earn Your Stripes">"Rank Progression"</SectionHeading>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {RANKS.iter().map(rank_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn rank_card(rank: &'static Rank) -> impl IntoView {
    let badge_class = format!("w-8 h-8 {}", rank.accent);
    let name_class = format!("text-2xl font-black italic uppercase mb-3 {}", rank.accent);
    view! {
        <div class="bg-brand-black p-6 border border-white/10 hover:border-brand-yellow/30 transition-all hover:-translate-y-2">
            <div class="flex justify-between items-start mb-4">
                <IconSvg icon=Icon::Zap class=badge_class filled=true/>
                <span class="font-mono text-[10px] text-white/30 bg-white/5 px-2 py-1">{rank.range_label()}</span>
            </div>
            <h3 class=name_class>{rank.name}</h3>
            <p class="text-white/60 text-xs font-bold uppercase tracking-wider leading-relaxed border-l-2 border-white/10 pl-3">
                {format!("\"{}\"", rank.quote)}
            </p>
        </div>
    }
}

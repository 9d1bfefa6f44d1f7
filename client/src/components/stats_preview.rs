//! Static analytics teaser: peak-window bar chart and the danger-zone card.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::section_heading::SectionHeading;
use crate::content::{PEAK_WINDOW_AXIS, PEAK_WINDOW_BARS, bar_height_style};

const GRID_BACKGROUND: &str = "background-image: linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px), linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px); background-size: 40px 40px";

#[component]
pub fn StatsPreview() -> impl IntoView {
    view! {
        <section class="py-24 bg-brand-black relative overflow-hidden">
            <div class="absolute inset-0" style=GRID_BACKGROUND></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading subtitle="Data Driven">
                    "Know Your "
                    <span class="text-brand-yellow">"Weakness"</span>
                </SectionHeading>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <PeakWindowCard/>
                    <DangerZoneCard/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PeakWindowCard() -> impl IntoView {
    view! {
        <div class="col-span-1 md:col-span-2 bg-[#1a1a1a] p-8 border border-white/10 shadow-2xl">
            <div class="flex items-center gap-3 mb-6">
                <IconSvg icon=Icon::BatteryCharging class="text-brand-yellow"/>
                <h3 class="text-xl font-black uppercase text-white">"Peak Performance Window"</h3>
            </div>
            <div class="flex items-end gap-4 h-48">
                {PEAK_WINDOW_BARS
                    .iter()
                    .map(|height| {
                        view! {
                            <div class="flex-1 h-full bg-white/5 hover:bg-brand-yellow transition-colors relative group">
                                <div
                                    class="w-full bg-white/20 absolute bottom-0 group-hover:bg-brand-yellow transition-all duration-500"
                                    style=bar_height_style(*height)
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-4 flex justify-between text-xs font-mono text-white/40">
                {PEAK_WINDOW_AXIS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
            </div>
            <p class="mt-6 text-sm text-white/70 font-bold uppercase tracking-wide">
                "You are 3.5x more likely to finish sessions started between "
                <span class="text-brand-yellow">"9AM - 11AM"</span>
                "."
            </p>
        </div>
    }
}

#[component]
fn DangerZoneCard() -> impl IntoView {
    view! {
        <div class="bg-[#1a1a1a] p-8 border border-white/10 shadow-2xl relative overflow-hidden">
            <div class="absolute top-0 right-0 p-4 opacity-10">
                <IconSvg icon=Icon::Skull size=100/>
            </div>
            <h3 class="text-xl font-black uppercase text-white mb-2">"Danger Zone"</h3>
            <p class="text-xs text-white/50 uppercase tracking-widest mb-8">"Most Common Quit Point"</p>

            <div class="text-center py-8">
                <span class="text-6xl font-black text-brand-red">"14:00"</span>
                <span class="block text-brand-red/50 text-sm font-bold uppercase mt-2">"Minutes In"</span>
            </div>

            <div class="bg-brand-red/10 p-4 border border-brand-red/20 mt-4">
                <p class="text-brand-red text-xs font-bold uppercase leading-relaxed">
                    "Warning: You tend to break focus 14 minutes in. Push past this wall."
                </p>
            </div>
        </div>
    }
}

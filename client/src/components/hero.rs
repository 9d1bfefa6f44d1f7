//! Above-the-fold pitch with the timer dashboard mockup.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconSvg};
use crate::components::phone_mockup::PhoneMockup;
use crate::content::{BRAND_NAME, HERO_STATS, SELECTED_TIMER_MODE, TIMER_MODES, rank_for_sessions};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <div class="absolute inset-0 bg-noise opacity-[0.03] pointer-events-none"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-brand-black via-brand-black/90 to-brand-black pointer-events-none"></div>
            <div class="absolute top-1/4 -left-20 w-96 h-96 bg-brand-yellow/10 rounded-full blur-[100px]"></div>
            <div class="absolute bottom-1/4 -right-20 w-96 h-96 bg-brand-red/10 rounded-full blur-[100px]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 w-full">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <HeroCopy/>
                    <div class="relative flex justify-center lg:justify-end animate-float">
                        <div class="absolute inset-0 bg-brand-yellow/20 blur-[60px] transform scale-75 rounded-full"></div>
                        <PhoneMockup active=true>
                            <DashboardScreen/>
                        </PhoneMockup>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroCopy() -> impl IntoView {
    view! {
        <div class="text-center lg:text-left space-y-8 animate-fade-in">
            <div class="inline-flex items-center gap-2 px-4 py-2 border border-brand-yellow/30 bg-brand-yellow/5 rounded-full">
                <span class="w-2 h-2 rounded-full bg-brand-yellow animate-pulse"></span>
                <span class="text-brand-yellow text-xs font-bold tracking-widest uppercase">"Training System Active"</span>
            </div>

            <h1 class="text-6xl md:text-7xl lg:text-8xl font-black italic uppercase tracking-tighter leading-[0.9] text-white">
                "Stop "
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-brand-yellow to-brand-orange">"Quitting"</span>
                " "
                <br/>
                "Mid-Session."
            </h1>

            <p class="text-lg md:text-xl text-white/70 max-w-xl mx-auto lg:mx-0 font-medium leading-relaxed">
                "Most productivity apps baby you. LockIn actively fights your impulse to quit with tough-love coaching and friction-based exit flows."
            </p>

            <div class="flex flex-col sm:flex-row items-center gap-4 justify-center lg:justify-start">
                <Button variant=ButtonVariant::Primary>
                    "Start Training"
                    <IconSvg icon=Icon::ChevronRight class="w-5 h-5"/>
                </Button>
                <Button variant=ButtonVariant::Secondary>"View Demo"</Button>
            </div>

            <div class="pt-8 flex items-center justify-center lg:justify-start gap-8 opacity-60">
                {HERO_STATS
                    .iter()
                    .enumerate()
                    .map(|(idx, stat)| {
                        view! {
                            {(idx > 0).then(|| view! { <div class="w-px h-8 bg-white/20"></div> })}
                            <div class="text-center lg:text-left">
                                <p class="text-2xl font-black font-mono text-white">{stat.value}</p>
                                <p class="text-xs uppercase tracking-widest text-white/50">{stat.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Fake in-app dashboard: timer preset picker and category shortcuts.
#[component]
fn DashboardScreen() -> impl IntoView {
    view! {
        <div class="flex flex-col h-full p-6 text-white font-sans bg-[#111]">
            <div class="flex justify-between items-center mb-8 opacity-50 text-[10px] font-mono">
                <span>{format!("{BRAND_NAME} SYSTEM")}</span>
                <div class="flex items-center gap-1 text-brand-yellow">
                    <IconSvg icon=Icon::Zap size=10 filled=true/>
                    <span>{rank_for_sessions(0).name}</span>
                </div>
            </div>

            <div class="bg-[#1a1a1a] p-6 border border-white/10 shadow-2xl relative mb-6">
                <div class="absolute top-0 left-0 w-2 h-2 border-t-2 border-l-2 border-brand-yellow"></div>
                <div class="absolute top-0 right-0 w-2 h-2 border-t-2 border-r-2 border-brand-yellow"></div>
                <div class="absolute bottom-0 left-0 w-2 h-2 border-b-2 border-l-2 border-brand-yellow"></div>
                <div class="absolute bottom-0 right-0 w-2 h-2 border-b-2 border-r-2 border-brand-yellow"></div>

                <div class="text-center">
                    <span class="text-[80px] leading-none font-black tracking-tighter block text-white">"25"</span>
                    <span class="text-brand-yellow font-bold tracking-[0.2em] text-xs">"MINUTES"</span>
                </div>

                <div class="mt-6 flex justify-between gap-1 text-[8px] font-mono text-white/40 uppercase">
                    {TIMER_MODES
                        .iter()
                        .map(|mode| {
                            let class = if *mode == SELECTED_TIMER_MODE { "text-brand-yellow" } else { "" };
                            view! { <span class=class>{*mode}</span> }
                        })
                        .collect_view()}
                </div>
                <div class="w-full h-1 bg-white/10 mt-1 relative">
                    <div class="absolute left-1/2 top-1/2 -translate-y-1/2 -translate-x-1/2 w-4 h-4 bg-brand-yellow rounded-full shadow-[0_0_10px_#FFD600]"></div>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-3 mb-6">
                <CategoryTile icon=Icon::Briefcase label="Deep Work"/>
                <CategoryTile icon=Icon::Terminal label="Coding"/>
            </div>

            <div class="mt-auto">
                <button
                    type="button"
                    class="w-full bg-white/10 border border-white/20 text-white font-black uppercase tracking-widest py-4 flex items-center justify-center gap-2 hover:bg-white hover:text-black transition-colors clip-button group"
                >
                    <IconSvg icon=Icon::Lock size=16 class="group-hover:text-black"/>
                    "Custom Lock In"
                </button>
                <div class="flex items-center gap-2 mt-4 opacity-40 justify-center">
                    <IconSvg icon=Icon::ShieldAlert size=12 class="text-brand-red"/>
                    <span class="text-[8px] uppercase font-bold">"Don't pick beast mode just to look tough."</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CategoryTile(icon: Icon, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/5 p-4 border border-white/10 flex flex-col items-center gap-2 hover:bg-white/10 transition-colors">
            <IconSvg icon=icon size=20/>
            <span class="text-[10px] font-bold tracking-widest uppercase">{label}</span>
        </div>
    }
}

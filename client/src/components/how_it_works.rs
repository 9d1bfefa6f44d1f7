//! Exit protocol walkthrough anchored at `#method`.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::phone_mockup::PhoneMockup;
use crate::components::section_heading::SectionHeading;
use crate::content::{EXIT_STEPS, METHOD_ANCHOR, step_number};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=METHOD_ANCHOR class="py-24 bg-brand-black relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <SectionHeading subtitle="The Exit Protocol">
                            "Trying to Quit? "
                            <br/>
                            <span class="text-brand-red">"Think Again."</span>
                        </SectionHeading>
                        <p class="text-lg text-white/70 mb-10">
                            "Unlike other apps that let you tap \"cancel\" and walk away, LockIn forces self-awareness. Breaking a commitment shouldn't be easy."
                        </p>
                        <div class="space-y-8">
                            {EXIT_STEPS
                                .iter()
                                .enumerate()
                                .map(|(idx, step)| {
                                    view! {
                                        <div class="flex gap-6 items-start group">
                                            <div class="text-4xl font-black italic text-white/10 group-hover:text-brand-yellow transition-colors font-mono">
                                                {step_number(idx)}
                                            </div>
                                            <div>
                                                <h4 class="text-xl font-black uppercase italic text-white mb-2 flex items-center gap-3">
                                                    {step.title}
                                                    <span class="h-px w-12 bg-white/10 group-hover:bg-brand-yellow/50 transition-colors"></span>
                                                </h4>
                                                <p class="text-white/60 text-sm font-bold uppercase tracking-wide">
                                                    {step.description}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative flex justify-center">
                        <PhoneMockup active=true>
                            <FrictionScreen/>
                        </PhoneMockup>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Fake in-app screen shown when the user tries to bail mid-session.
#[component]
fn FrictionScreen() -> impl IntoView {
    view! {
        <div class="h-full w-full bg-[#111] relative flex flex-col p-6">
            <div class="absolute inset-0 bg-white/5 bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-brand-red/10 via-transparent to-transparent"></div>

            <div class="relative z-10 flex-1 flex flex-col items-center justify-center text-center">
                <IconSvg icon=Icon::ShieldAlert class="w-16 h-16 text-brand-red mb-6 animate-bounce"/>

                <h2 class="text-4xl font-black italic uppercase text-white mb-2 leading-none">
                    "Are You "
                    <br/>
                    "Kidding?"
                </h2>

                <div class="my-8 w-full p-6 bg-white/5 border-l-4 border-brand-red text-left">
                    <p class="text-white/90 font-bold uppercase text-sm leading-relaxed">
                        "\"You're 18 minutes in. The urge to quit is just weakness leaving the body. Do not let it win.\""
                    </p>
                </div>

                <div class="w-full space-y-3">
                    <button
                        type="button"
                        class="w-full bg-white text-black font-black uppercase tracking-widest py-4 flex items-center justify-center gap-2 hover:bg-gray-200 transition-colors shadow-lg transform hover:scale-105"
                    >
                        <IconSvg icon=Icon::PlayCircle size=20 filled=true/>
                        "I'm Staying"
                    </button>
                    <button
                        type="button"
                        class="w-full bg-transparent text-white/30 text-[10px] font-bold uppercase tracking-[0.2em] py-3 hover:text-brand-red transition-colors"
                    >
                        "I need to quit (Break Streak)"
                    </button>
                </div>
            </div>
        </div>
    }
}

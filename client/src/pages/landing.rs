//! Landing page shell: progress bar, navbar, sections, footer.
//!
//! The shell owns the page's `ScrollState`. In hydrate builds it attaches a
//! window scroll listener for the lifetime of the page and hands the signal
//! read-only to the progress bar.

use leptos::prelude::*;

use crate::components::cta::Cta;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::gamification::Gamification;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Navbar;
use crate::components::progress_bar::ProgressBar;
use crate::components::stats_preview::StatsPreview;
use crate::state::scroll::ScrollState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let scroll = RwSignal::new(ScrollState::default());

    #[cfg(feature = "hydrate")]
    crate::util::scroll_source::track_scroll(crate::util::scroll_source::WindowScrollSource, scroll);

    view! {
        <div class="bg-brand-black min-h-screen text-white font-sans selection:bg-brand-yellow selection:text-black overflow-x-hidden">
            <ProgressBar scroll=scroll.read_only()/>
            <Navbar/>
            <main>
                <Hero/>
                <Features/>
                <HowItWorks/>
                <StatsPreview/>
                <Gamification/>
                <Cta/>
            </main>
            <Footer/>
        </div>
    }
}

//! Fixed reading-progress bar along the top edge of the viewport.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[component]
pub fn ProgressBar(scroll: ReadSignal<ScrollState>) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 h-1 bg-brand-yellow z-[60]"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", scroll.get().percent())
            style=move || scroll.get().bar_width_style()
        ></div>
    }
}

//! Device frame used to stage fake app screens.

use leptos::prelude::*;

fn frame_class(active: bool) -> &'static str {
    if active {
        "relative w-[300px] h-[600px] bg-brand-black rounded-[3rem] border-8 border-[#2a2a2a] shadow-2xl overflow-hidden transform transition-transform duration-700 translate-y-0 opacity-100"
    } else {
        "relative w-[300px] h-[600px] bg-brand-black rounded-[3rem] border-8 border-[#2a2a2a] shadow-2xl overflow-hidden transform transition-transform duration-700 translate-y-10 opacity-0"
    }
}

#[component]
pub fn PhoneMockup(#[prop(optional)] active: bool, children: Children) -> impl IntoView {
    view! {
        <div class=frame_class(active)>
            // Notch
            <div class="absolute top-0 left-1/2 -translate-x-1/2 h-7 w-32 bg-black rounded-b-2xl z-20"></div>
            <div class="w-full h-full bg-brand-black relative">{children()}</div>
        </div>
    }
}

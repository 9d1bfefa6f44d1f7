//! Top navigation with a collapsible mobile panel.
//!
//! The navbar owns its `MenuState`; the panel markup exists only while the
//! menu is open.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconSvg};
use crate::content::{BRAND_NAME, NAV_LINKS};
use crate::state::menu::MenuState;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let is_open = move || menu.get().is_open;

    let on_menu_click = move |_| {
        menu.update(|m| {
            m.toggle();
        });
    };

    view! {
        <nav class="fixed w-full z-50 bg-brand-black/90 backdrop-blur-md border-b border-white/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <a href="#" class="flex-shrink-0 flex items-center gap-2">
                        <IconSvg icon=Icon::Lock class="w-8 h-8 text-brand-yellow"/>
                        <span class="font-black text-2xl tracking-tighter italic text-white">{BRAND_NAME}</span>
                    </a>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href()
                                            class="text-white/70 hover:text-brand-yellow font-bold uppercase tracking-wider text-sm transition-colors"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <Button variant=ButtonVariant::Primary class="py-2 px-6 text-xs">
                                "Get App"
                            </Button>
                        </div>
                    </div>
                    <div class="-mr-2 flex md:hidden">
                        <button
                            type="button"
                            class="text-white hover:text-brand-yellow p-2"
                            aria-controls="mobile-menu"
                            aria-expanded=move || is_open().to_string()
                            aria-label=move || menu.get().button_label()
                            on:click=on_menu_click
                        >
                            <Show
                                when=is_open
                                fallback=|| view! { <IconSvg icon=Icon::Menu/> }
                            >
                                <IconSvg icon=Icon::X/>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>
            {move || mobile_panel(menu.get())}
        </nav>
    }
}

/// Mobile link list. `None` while the menu is closed.
pub fn mobile_panel(menu: MenuState) -> Option<impl IntoView> {
    menu.is_open.then(|| {
        view! {
            <div id="mobile-menu" class="md:hidden bg-brand-gray border-b border-white/10">
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href() class="text-white block px-3 py-2 text-base font-black uppercase">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

//! Inline SVG glyphs for the icon set used on the landing page.
//!
//! Geometry follows the 24x24 stroked outline style: round caps and joins,
//! stroke width 2, `currentColor` so Tailwind text colors tint the glyph.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

/// One SVG primitive in a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
}

/// Icons referenced by page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    BatteryCharging,
    Briefcase,
    ChevronRight,
    Lock,
    Menu,
    PlayCircle,
    ShieldAlert,
    Skull,
    Smartphone,
    Terminal,
    X,
    Zap,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::BatteryCharging,
        Icon::Briefcase,
        Icon::ChevronRight,
        Icon::Lock,
        Icon::Menu,
        Icon::PlayCircle,
        Icon::ShieldAlert,
        Icon::Skull,
        Icon::Smartphone,
        Icon::Terminal,
        Icon::X,
        Icon::Zap,
    ];

    pub fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::BatteryCharging => &[
                Shape::Path("M15 7h1a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2h-2"),
                Shape::Path("M6 7H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h1"),
                Shape::Path("m11 7-3 5h4l-3 5"),
                Shape::Path("M22 11v2"),
            ],
            Icon::Briefcase => &[
                Shape::Rect { x: 2.0, y: 7.0, width: 20.0, height: 14.0, rx: 2.0 },
                Shape::Path("M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
            ],
            Icon::ChevronRight => &[Shape::Path("m9 18 6-6-6-6")],
            Icon::Lock => &[
                Shape::Rect { x: 3.0, y: 11.0, width: 18.0, height: 11.0, rx: 2.0 },
                Shape::Path("M7 11V7a5 5 0 0 1 10 0v4"),
            ],
            Icon::Menu => &[Shape::Path("M4 6h16"), Shape::Path("M4 12h16"), Shape::Path("M4 18h16")],
            Icon::PlayCircle => &[
                Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Shape::Path("M10 8l6 4-6 4z"),
            ],
            Icon::ShieldAlert => &[
                Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"),
                Shape::Path("M12 8v4"),
                Shape::Path("M12 16h.01"),
            ],
            Icon::Skull => &[
                Shape::Circle { cx: 9.0, cy: 12.0, r: 1.0 },
                Shape::Circle { cx: 15.0, cy: 12.0, r: 1.0 },
                Shape::Path("M8 20v2h8v-2"),
                Shape::Path("m12.5 17-.5-1-.5 1h1z"),
                Shape::Path("M16 20a2 2 0 0 0 1.56-3.25 8 8 0 1 0-11.12 0A2 2 0 0 0 8 20"),
            ],
            Icon::Smartphone => &[
                Shape::Rect { x: 5.0, y: 2.0, width: 14.0, height: 20.0, rx: 2.0 },
                Shape::Path("M12 18h.01"),
            ],
            Icon::Terminal => &[Shape::Path("m4 17 6-6-6-6"), Shape::Path("M12 19h8")],
            Icon::X => &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")],
            Icon::Zap => &[Shape::Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
        }
    }
}

fn shape_view(shape: Shape) -> AnyView {
    match shape {
        Shape::Path(d) => view! { <path d=d></path> }.into_any(),
        Shape::Rect { x, y, width, height, rx } => {
            let rx = rx.to_string();
            view! {
                <rect
                    x=x.to_string()
                    y=y.to_string()
                    width=width.to_string()
                    height=height.to_string()
                    rx=rx.clone()
                    ry=rx
                ></rect>
            }
            .into_any()
        }
        Shape::Circle { cx, cy, r } => {
            view! { <circle cx=cx.to_string() cy=cy.to_string() r=r.to_string()></circle> }.into_any()
        }
    }
}

/// Render `icon` as an inline SVG.
///
/// `filled` paints the glyph interior with `currentColor`, matching the solid
/// variant used for rank badges and the play button.
#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(optional, into)] class: String,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };
    view! {
        <svg
            class=class
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.shapes().iter().copied().map(shape_view).collect_view()}
        </svg>
    }
}

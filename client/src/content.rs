//! Static copy and chart data for the landing page.
//!
//! DESIGN
//! ======
//! Every table is an immutable `&'static` slice defined once and rendered
//! in order. Accent values are complete Tailwind class names so the class
//! scanner sees them in source.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icon::Icon;

pub const BRAND_NAME: &str = "LOCKIN";
pub const COPYRIGHT: &str = "© 2024 LOCKIN SYSTEMS INC.";

/// In-page anchor target shared by the navbar and the section it points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const FEATURES_ANCHOR: &str = "features";
pub const METHOD_ANCHOR: &str = "method";
pub const RANKS_ANCHOR: &str = "ranks";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", anchor: FEATURES_ANCHOR },
    NavLink { label: "The Method", anchor: METHOD_ANCHOR },
    NavLink { label: "Ranks", anchor: RANKS_ANCHOR },
];

pub const FOOTER_LINKS: &[&str] = &["Privacy", "Terms", "Support", "Twitter"];

/// Headline number shown under the hero call-to-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "50k+", label: "Sessions Locked" },
    HeroStat { value: "94%", label: "Completion Rate" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub icon_class: &'static str,
    pub accent: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Focus Lock System",
        description: "Immersive fullscreen timer that minimizes distractions. Three modes: Quick Hit (15m), Standard (25m), and Beast Mode (50m+).",
        icon: Icon::Lock,
        icon_class: "w-6 h-6 text-brand-black",
        accent: "bg-brand-yellow",
    },
    Feature {
        title: "Friction-Based Exit",
        description: "We make it hard to quit. A 3-step exit process forces you to confront why you're giving up before you break your streak.",
        icon: Icon::ShieldAlert,
        icon_class: "w-6 h-6 text-white",
        accent: "bg-brand-red",
    },
    Feature {
        title: "Gamified Discipline",
        description: "Rank up from Recruit to Commander. Build streaks. Lose it all if you quit without a valid emergency.",
        icon: Icon::Zap,
        icon_class: "w-6 h-6 text-brand-black",
        accent: "bg-brand-orange",
    },
];

/// One stage of the exit protocol. Step numbers derive from position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXIT_STEPS: &[ExitStep] = &[
    ExitStep {
        title: "Friction Screen",
        description: "You're hit with the hard truth. 'Are you kidding?' messaging challenges your impulse.",
    },
    ExitStep {
        title: "Exit Survey",
        description: "You must state why. 'Just didn't feel like it' is an option, but you have to admit it.",
    },
    ExitStep {
        title: "Hardass Response",
        description: "Custom coaching based on your excuse. Emergency? We get it. Lazy? We call you out.",
    },
];

/// Two-digit, one-based label for the step at `index`.
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Rank tier keyed by completed sessions. `max_sessions: None` is open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rank {
    pub name: &'static str,
    pub min_sessions: u32,
    pub max_sessions: Option<u32>,
    pub quote: &'static str,
    pub accent: &'static str,
}

impl Rank {
    pub fn range_label(&self) -> String {
        match self.max_sessions {
            Some(max) => format!("{}-{} Sessions", self.min_sessions, max),
            None => format!("{}+ Sessions", self.min_sessions),
        }
    }

    pub fn contains(&self, sessions: u32) -> bool {
        sessions >= self.min_sessions && self.max_sessions.map_or(true, |max| sessions <= max)
    }
}

pub const RANKS: &[Rank] = &[
    Rank {
        name: "RECRUIT",
        min_sessions: 0,
        max_sessions: Some(5),
        quote: "You showed up. That's half the battle.",
        accent: "text-white/70",
    },
    Rank {
        name: "SOLDIER",
        min_sessions: 6,
        max_sessions: Some(20),
        quote: "That's what discipline looks like.",
        accent: "text-brand-yellow",
    },
    Rank {
        name: "WARRIOR",
        min_sessions: 21,
        max_sessions: Some(50),
        quote: "Finally. I was starting to think you were all talk.",
        accent: "text-brand-orange",
    },
    Rank {
        name: "COMMANDER",
        min_sessions: 51,
        max_sessions: None,
        quote: "You're not the same person who started this.",
        accent: "text-brand-red",
    },
];

/// Rank held after `sessions` completed sessions.
pub fn rank_for_sessions(sessions: u32) -> &'static Rank {
    RANKS
        .iter()
        .rev()
        .find(|rank| rank.contains(sessions))
        .unwrap_or(&RANKS[0])
}

/// Completion likelihood per time slot, as bar heights in percent.
pub const PEAK_WINDOW_BARS: [u8; 8] = [40, 65, 85, 45, 30, 20, 10, 50];
pub const PEAK_WINDOW_AXIS: &[&str] = &["6AM", "12PM", "6PM", "12AM"];

pub fn bar_height_style(percent: u8) -> String {
    format!("height: {}%", percent.min(100))
}

/// Timer presets shown on the hero phone mockup. The middle one is selected.
pub const TIMER_MODES: &[&str] = &["Quick", "Standard", "Beast"];
pub const SELECTED_TIMER_MODE: &str = "Standard";

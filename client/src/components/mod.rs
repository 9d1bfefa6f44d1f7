//! Landing page sections and the building blocks they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections are pure views over the tables in `content`. Only `navbar`
//! (menu toggle) and `progress_bar` (scroll signal from the page shell)
//! render reactive state.

pub mod button;
pub mod cta;
pub mod features;
pub mod footer;
pub mod gamification;
pub mod hero;
pub mod how_it_works;
pub mod icon;
pub mod navbar;
pub mod phone_mockup;
pub mod progress_bar;
pub mod section_heading;
pub mod stats_preview;

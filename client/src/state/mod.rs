//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Each state cell is owned by exactly one component: `scroll` by the page
//! shell, `menu` by the navbar. Neither is provided through context.

pub mod menu;
pub mod scroll;

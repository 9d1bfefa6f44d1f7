//! Scroll-derived reading progress for the landing page shell.
//!
//! ARCHITECTURE
//! ============
//! The page shell owns one `RwSignal<ScrollState>`. Every scroll notification
//! delivers a `ScrollMetrics` snapshot of the document element, and the shell
//! folds it into the state with `ScrollState::observe`. The only consumer is
//! the progress bar, which renders a width proportional to `progress`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Document-element readings taken on a scroll notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }

    /// Total scrollable distance. Zero or negative when the content fits in
    /// one viewport.
    pub fn scrollable_range(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Fraction of the scrollable range the viewport has traversed.
///
/// Always finite and within `[0.0, 1.0]`. A non-positive or non-finite range
/// yields `0.0`.
pub fn progress_ratio(scroll_top: f64, scrollable_range: f64) -> f64 {
    if !scrollable_range.is_finite() || scrollable_range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable_range).clamp(0.0, 1.0)
}

/// Reading progress shown by the top bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
}

impl ScrollState {
    /// Recompute progress from a fresh metrics snapshot.
    pub fn observe(&mut self, metrics: ScrollMetrics) {
        self.progress = progress_ratio(metrics.scroll_top, metrics.scrollable_range());
    }

    /// Progress as a percentage in `[0, 100]`.
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }

    /// Inline `width` declaration for the progress bar.
    pub fn bar_width_style(&self) -> String {
        format!("width: {}%", self.percent())
    }
}

//! Scroll notification sources and the mount-scoped subscription guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell needs exactly one scroll listener per mount. `ScrollSource`
//! is the seam between the shell and the browser: `WindowScrollSource` wires
//! the window `scroll` event in hydrate builds, and tests drive an in-memory
//! source. `ScrollSubscription` is an RAII guard; dropping it deregisters the
//! listener, and `track_scroll` ties that drop to the reactive owner's
//! cleanup so a torn-down shell never receives another update.

#[cfg(test)]
#[path = "scroll_source_test.rs"]
mod scroll_source_test;

use leptos::prelude::*;

use crate::state::scroll::{ScrollMetrics, ScrollState};

/// Callback invoked with fresh metrics on each scroll notification.
pub type ScrollHandler = Box<dyn Fn(ScrollMetrics) + Send + Sync>;

/// A place that can report scroll position and notify on change.
pub trait ScrollSource {
    /// Token returned by `subscribe` and consumed by `unsubscribe`.
    type Handle;

    /// Current readings, if the environment can provide them.
    fn sample(&self) -> Option<ScrollMetrics>;

    /// Register `on_scroll`. Returns `None` when no listener could be attached.
    fn subscribe(&self, on_scroll: ScrollHandler) -> Option<Self::Handle>;

    /// Remove a listener previously returned by `subscribe`.
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Live scroll listener. Detaches on drop.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Subscribe `on_scroll` for notifications from `source`.
    pub fn attach<F>(source: S, on_scroll: F) -> Self
    where
        F: Fn(ScrollMetrics) + Send + Sync + 'static,
    {
        let handle = source.subscribe(Box::new(on_scroll));
        if handle.is_none() {
            leptos::logging::warn!("scroll listener could not be attached; progress bar stays at 0");
        }
        Self { source, handle }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Deregister the listener. Idempotent.
    pub fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Feed `state` from `source` for the lifetime of the current reactive owner.
///
/// The current position is sampled once so a page restored mid-scroll shows
/// the right width before the first scroll event. In hydrate builds the
/// sample waits for an effect: attribute values are not re-applied while
/// server markup is being hydrated.
pub fn track_scroll<S>(source: S, state: RwSignal<ScrollState>)
where
    S: ScrollSource + Clone + Send + Sync + 'static,
    S::Handle: Send + Sync + 'static,
{
    let apply = move |metrics: ScrollMetrics| state.update(|s| s.observe(metrics));
    let subscription = ScrollSubscription::attach(source.clone(), apply);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(metrics) = source.sample() {
            apply(metrics);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        if let Some(metrics) = source.sample() {
            apply(metrics);
        }
    }

    on_cleanup(move || drop(subscription));
}

/// Window `scroll` events read against `document.documentElement`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScrollSource;

#[cfg(feature = "hydrate")]
fn document_metrics() -> Option<ScrollMetrics> {
    let element = web_sys::window()?.document()?.document_element()?;
    Some(ScrollMetrics::new(
        f64::from(element.scroll_top()),
        f64::from(element.scroll_height()),
        f64::from(element.client_height()),
    ))
}

#[cfg(feature = "hydrate")]
impl ScrollSource for WindowScrollSource {
    type Handle = WindowListenerHandle;

    fn sample(&self) -> Option<ScrollMetrics> {
        document_metrics()
    }

    fn subscribe(&self, on_scroll: ScrollHandler) -> Option<Self::Handle> {
        web_sys::window()?;
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(metrics) = document_metrics() {
                on_scroll(metrics);
            }
        });
        log::debug!("scroll listener attached");
        Some(handle)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        handle.remove();
        log::debug!("scroll listener removed");
    }
}

//! One-way event interface from the orchestrator to the display layer.
//!
//! The orchestrator reports what happened; how it is shown (spinners,
//! overlays, minimum visible durations) is decided by the implementor.

use std::time::{Duration, Instant};

use crate::models::PokemonRef;

/// Receiver of orchestration events.
///
/// Every `on_loading_started` is followed by exactly one
/// `on_loading_finished`, even when every detail fetch of the page failed.
/// Callbacks run inline on the task driving the orchestrator and should
/// return quickly.
pub trait DisplayNotifier {
    fn on_loading_started(&self);

    /// A page load ended. `success` is false if the page request failed or
    /// any detail aggregation of the page failed.
    fn on_loading_finished(&self, started_at: Instant, success: bool);

    fn on_search_started(&self) {}

    /// A search ended. `result` is the matched reference, if any.
    fn on_search_finished(&self, result: Option<&PokemonRef>) {
        let _ = result;
    }
}

/// A notifier that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl DisplayNotifier for NoopNotifier {
    fn on_loading_started(&self) {}

    fn on_loading_finished(&self, _started_at: Instant, _success: bool) {}
}

impl<N: DisplayNotifier + ?Sized> DisplayNotifier for std::sync::Arc<N> {
    fn on_loading_started(&self) {
        (**self).on_loading_started()
    }

    fn on_loading_finished(&self, started_at: Instant, success: bool) {
        (**self).on_loading_finished(started_at, success)
    }

    fn on_search_started(&self) {
        (**self).on_search_started()
    }

    fn on_search_finished(&self, result: Option<&PokemonRef>) {
        (**self).on_search_finished(result)
    }
}

/// How much longer a loading indicator started at `started_at` has to stay
/// visible to have been shown for at least `minimum`.
///
/// Returns [`Duration::ZERO`] once `minimum` has elapsed. Pair with
/// [`config::MIN_LOADING_VISIBLE`](crate::config::MIN_LOADING_VISIBLE).
pub fn hold_time(started_at: Instant, minimum: Duration) -> Duration {
    minimum.saturating_sub(started_at.elapsed())
}

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the sticky page header, in CSS pixels.
pub const HEADER_OFFSET: f64 = 80.0;
/// Delay before the initial anchor check, letting the first layout settle.
pub const INITIAL_ALIGN_DELAY_MS: u32 = 100;

pub trait Viewport {
    /// Current fragment, including the leading `#` when present.
    fn hash(&self) -> String;
    /// Top edge of the element with this id, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

pub fn anchor_id(hash: &str) -> Option<&str> {
    Some(hash.strip_prefix('#').unwrap_or(hash)).filter(|id| !id.is_empty())
}

/// Document position that puts an element just below the header.
pub fn scroll_destination(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Scrolls the fragment's target under the header. Returns the destination,
/// or `None` when there is no fragment or nothing carries that id.
pub fn align_to_fragment(viewport: &impl Viewport) -> Option<f64> {
    let hash = viewport.hash();
    let id = anchor_id(&hash)?;
    let top = viewport.element_top(id)?;
    let destination = scroll_destination(top, viewport.scroll_y());
    log::debug!("Aligning anchor #{} to {}", id, destination);
    viewport.smooth_scroll_to(destination);
    Some(destination)
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn hash(&self) -> String {
        gloo_utils::window().location().hash().unwrap_or_default()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = gloo_utils::document().get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        gloo_utils::window().scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        gloo_utils::window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Keeps deep links aligned while mounted: one `hashchange` listener plus a
/// deferred check for a fragment present at load. Dropping the controller
/// removes the listener and cancels a pending check.
pub struct NavigationController {
    _listener: EventListener,
    _initial: Option<Timeout>,
}

impl NavigationController {
    pub fn install<V: Viewport + 'static>(viewport: V) -> Self {
        let viewport = Rc::new(viewport);

        let on_change = Rc::clone(&viewport);
        let listener = EventListener::new_with_options(
            &gloo_utils::window(),
            "hashchange",
            EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: true,
            },
            move |_| {
                align_to_fragment(on_change.as_ref());
            },
        );

        let initial = anchor_id(&viewport.hash()).is_some().then(|| {
            let viewport = Rc::clone(&viewport);
            Timeout::new(INITIAL_ALIGN_DELAY_MS, move || {
                align_to_fragment(viewport.as_ref());
            })
        });

        Self {
            _listener: listener,
            _initial: initial,
        }
    }
}

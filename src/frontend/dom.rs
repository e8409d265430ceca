use js_sys::Reflect;
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window,
};

use crate::navigation::{scroll_target, SectionBounds};

const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn supports_intersection_observer() -> bool {
    let Some(win) = window() else {
        return false;
    };

    Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Scrolls so the element with `id` sits just below the fixed header.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };

    let Some(target) = win.document().and_then(|d| d.get_element_by_id(id)) else {
        warn!(section = id, "scroll target missing");
        return false;
    };

    let top = scroll_target(target.get_bounding_client_rect().top(), scroll_y());
    let behavior = if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    win.scroll_to_with_scroll_to_options(&options);
    debug!(section = id, top, "scrolling to section");
    true
}

/// Viewport bounds of every `<section>`, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(sections) = document().and_then(|d| d.query_selector_all("section").ok()) else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|index| sections.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            SectionBounds::new(element.id(), rect.top(), rect.height())
        })
        .collect()
}

/// Returns `false` when the browser refused to open a new context.
pub fn open_in_new_tab(url: &str) -> bool {
    window()
        .and_then(|win| win.open_with_url_and_target(url, "_blank").ok().flatten())
        .is_some()
}

/// Adds `loaded` to `<body>` once the window `load` event has fired.
pub fn mark_loaded() {
    let Some(win) = window() else {
        return;
    };

    let add_class = || {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.class_list().add_1("loaded");
        }
    };

    if win.document().map(|d| d.ready_state()).as_deref() == Some("complete") {
        add_class();
        return;
    }

    let callback = Closure::<dyn FnMut(Event)>::new(move |_| add_class());
    if win
        .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(error) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!(event, ?error, "could not attach listener");
            return None;
        }

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win: Window = window()?;
        Self::new(&win, event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = document()?;
        Self::new(&document, event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

use gloo_timers::callback::Timeout;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom::supports_intersection_observer;
use crate::{
    reveal::{RevealOptions, RevealState, Stagger},
    timing::as_millis_u32,
};

/// Observes one element and fires `on_reveal` on its first intersection, then
/// stops observing it. Disconnects when dropped.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe_once<F>(element: &Element, options: RevealOptions, mut on_reveal: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let mut state = RevealState::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };

                    if state.observe(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                        on_reveal();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(error) => {
                    warn!(?error, "intersection observer rejected options");
                    return None;
                }
            };

        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` once the referenced element has scrolled into view.
///
/// Without `IntersectionObserver`, or without the element, content is shown
/// right away rather than staying hidden.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let mut observer = None;

            match node.cast::<Element>() {
                Some(element) if supports_intersection_observer() => {
                    let handle = revealed.clone();
                    observer = RevealObserver::observe_once(&element, options, move || {
                        handle.set(true);
                    });
                    if observer.is_none() {
                        revealed.set(true);
                    }
                }
                Some(_) => {
                    debug!("IntersectionObserver unavailable, revealing immediately");
                    revealed.set(true);
                }
                None => {
                    warn!("reveal target not mounted, revealing immediately");
                    revealed.set(true);
                }
            }

            move || drop(observer)
        });
    }

    *revealed
}

/// Number of children, counted from the first, whose staggered start time has
/// passed since `active` turned true. `None` starts every child at once.
#[hook]
pub fn use_stagger(active: bool, count: usize, stagger: Option<Stagger>) -> usize {
    let started = use_state_eq(|| 0usize);

    {
        let started = started.clone();
        use_effect_with((active, count, stagger), move |(active, count, stagger)| {
            let mut timers = Vec::new();

            if *active {
                match stagger {
                    Some(stagger) => {
                        for (index, delay) in stagger.schedule(*count).into_iter().enumerate() {
                            let started = started.clone();
                            timers.push(Timeout::new(as_millis_u32(delay), move || {
                                started.set(index + 1);
                            }));
                        }
                    }
                    None => started.set(*count),
                }
            }

            move || drop(timers)
        });
    }

    *started
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Block that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::SECTION);

    html! {
        <div ref={node} class={classes!("fade-in", props.class.clone(), revealed.then_some("visible"))}>
            {props.children.clone()}
        </div>
    }
}

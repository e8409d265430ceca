use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::debug;
use web_sys::KeyboardEvent;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::dom::{self, Listener};
use crate::{
    config::NavEntry,
    navigation::{active_section, anchor_target, is_scrolled, MenuState},
    timing::{as_millis_u32, FrameThrottle, FRAME_COOLDOWN, RESIZE_DEBOUNCE},
};

pub enum MenuAction {
    Toggle,
    Close,
    Key(String),
    Resize(f64),
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::Close => self.closed(),
            MenuAction::Key(key) => self.after_key(&key),
            MenuAction::Resize(width) => self.after_resize(width),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, PartialEq)]
struct ScrollState {
    active: Option<String>,
    scrolled: bool,
}

impl ScrollState {
    fn measure() -> Self {
        let sections = dom::section_bounds();
        Self {
            active: active_section(&sections).map(str::to_string),
            scrolled: is_scrolled(dom::scroll_y()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub owner: AttrValue,
    pub entries: Vec<NavEntry>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let scroll = use_state_eq(|| ScrollState {
        active: None,
        scrolled: false,
    });

    {
        let scroll = scroll.clone();
        use_effect_with((), move |_| {
            let update: Rc<dyn Fn()> = Rc::new(move || scroll.set(ScrollState::measure()));
            update();

            let mut throttle = FrameThrottle::default();
            let mut trailing: Option<Timeout> = None;
            let listener = Listener::on_window("scroll", move |_| {
                if throttle.admit(js_sys::Date::now()) {
                    update();
                } else {
                    // Catch the resting position after the last throttled event.
                    let update = Rc::clone(&update);
                    trailing.replace(Timeout::new(as_millis_u32(FRAME_COOLDOWN), move || update()));
                }
            });

            move || drop(listener)
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_effect_with((), move |_| {
            let on_key = {
                let dispatcher = dispatcher.clone();
                Listener::on_document("keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        dispatcher.dispatch(MenuAction::Key(event.key()));
                    }
                })
            };

            // Replacing the pending timer cancels it, so only the last resize runs.
            let mut pending: Option<Timeout> = None;
            let on_resize = Listener::on_window("resize", move |_| {
                let dispatcher = dispatcher.clone();
                let timer = Timeout::new(as_millis_u32(RESIZE_DEBOUNCE), move || {
                    let width = dom::viewport_width();
                    debug!(width, "resize settled");
                    dispatcher.dispatch(MenuAction::Resize(width));
                });
                pending.replace(timer);
            });

            move || {
                drop(on_key);
                drop(on_resize);
            }
        });
    }

    let open = menu.is_open();
    let on_toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let links = props.entries.iter().map(|entry| {
        let is_active = scroll.active.as_deref() == Some(entry.id.as_str());
        let onclick = {
            let dispatcher = menu.dispatcher();
            let id = entry.id.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                dispatcher.dispatch(MenuAction::Close);
                dom::scroll_to_section(&id);
            })
        };

        html! {
            <li class="nav-item" key={entry.id.clone()}>
                <a
                    href={format!("#{}", entry.id)}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    aria-current={is_active.then_some(AttrValue::Static("true"))}
                    onclick={onclick}
                >
                    {entry.label.clone()}
                </a>
            </li>
        }
    });

    html! {
        <nav id="navbar" class={classes!("navbar", scroll.scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">{props.owner.clone()}</AnchorLink>
                <ul id="nav-menu" class={classes!("nav-menu", open.then_some("active"))}>
                    {for links}
                </ul>
                <button
                    id="mobile-menu"
                    type="button"
                    class={classes!("nav-toggle", open.then_some("active"))}
                    aria-label="Toggle navigation"
                    aria-controls="nav-menu"
                    aria-expanded={open.to_string()}
                    onclick={on_toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-page link that scrolls smoothly below the fixed header.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                event.prevent_default();
                dom::scroll_to_section(id);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}

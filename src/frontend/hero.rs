use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{
    dom::{self, Listener},
    nav::AnchorLink,
    reveal::use_stagger,
};
use crate::{
    navigation::parallax_offset,
    reveal::HERO_STAGGER,
    timing::as_millis_u32,
    typing::Typewriter,
};

const HERO_CHILDREN: usize = 4;

pub struct TypingStep;

impl Reducible for Typewriter {
    type Action = TypingStep;

    fn reduce(self: Rc<Self>, _: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick();
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub phrases: Vec<String>,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    match Typewriter::new(props.phrases.iter().cloned()) {
        Ok(writer) => html! { <TypingLoop writer={writer} /> },
        Err(error) => {
            warn!(%error, "typing animation disabled");
            html! { <span id="typing-text" class="typing-text"></span> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct TypingLoopProps {
    writer: Typewriter,
}

#[function_component(TypingLoop)]
fn typing_loop(props: &TypingLoopProps) -> Html {
    let writer = use_reducer({
        let initial = props.writer.clone();
        move || initial
    });

    {
        let dispatcher = writer.dispatcher();
        // One timer per tick: each tick changes the deps, which re-arms it.
        use_effect_with((writer.ticks(), writer.next_delay()), move |(_, delay)| {
            let timer = Timeout::new(as_millis_u32(*delay), move || {
                dispatcher.dispatch(TypingStep);
            });
            move || drop(timer)
        });
    }

    html! {
        <span id="typing-text" class="typing-text">{writer.text().to_string()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub greeting: AttrValue,
    pub tagline: AttrValue,
    pub phrases: Vec<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = use_node_ref();
    let shown = use_stagger(true, HERO_CHILDREN, Some(HERO_STAGGER));

    {
        let background = background.clone();
        use_effect_with((), move |_| {
            let listener = Listener::on_window("scroll", move |_| {
                let Some(element) = background.cast::<HtmlElement>() else {
                    return;
                };
                let offset = parallax_offset(dom::scroll_y());
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            });
            move || drop(listener)
        });
    }

    let entrance = |index: usize| -> &'static str {
        if index < shown {
            "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;"
        } else {
            "opacity: 0; transform: translateY(30px);"
        }
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-background" ref={background}></div>
            <div class="hero-container">
                <div class="hero-text">
                    <h1 class="hero-title" style={entrance(0)}>{props.greeting.clone()}</h1>
                    <h2 class="hero-subtitle" style={entrance(1)}>
                        <TypingText phrases={props.phrases.clone()} />
                        <span class="cursor" aria-hidden="true">{"|"}</span>
                    </h2>
                    <p class="hero-description" style={entrance(2)}>{props.tagline.clone()}</p>
                    <div class="hero-buttons" style={entrance(3)}>
                        <AnchorLink href="#projects" class="btn btn-primary">{"View My Work"}</AnchorLink>
                        <AnchorLink href="#contact" class="btn btn-secondary">{"Get In Touch"}</AnchorLink>
                    </div>
                </div>
            </div>
            <AnchorLink href="#about" class="scroll-indicator">
                <span class="sr-only">{"Scroll to about"}</span>
                <span class="scroll-arrow" aria-hidden="true"></span>
            </AnchorLink>
        </section>
    }
}

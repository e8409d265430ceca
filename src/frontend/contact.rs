use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{
    dom,
    reveal::Reveal,
    sections::ExternalLink,
    toast::{notify, use_toaster},
};
use crate::{
    config::ContactDetails,
    contact::{ContactMessage, Field, PENDING_LABEL, SUBMIT_LABEL, SUBMIT_LATENCY, SUCCESS_MESSAGE},
    timing::as_millis_u32,
    toast::ToastKind,
};

pub enum FormAction {
    Set(Field, String),
    Reset,
}

impl Reducible for ContactMessage {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            FormAction::Reset => Rc::new(Self::default()),
        }
    }
}

fn event_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }

    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub owner: AttrValue,
    pub whatsapp_number: AttrValue,
    pub details: ContactDetails,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let details = &props.details;

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">{"Get In Touch"}</h2>
                </Reveal>
                <Reveal class="contact-content">
                    <div class="contact-info">
                        <div class="contact-item">
                            <span class="contact-label">{"Email"}</span>
                            <ExternalLink href={format!("mailto:{}", details.email)} label={details.email.clone()} />
                        </div>
                        <div class="contact-item">
                            <span class="contact-label">{"Phone"}</span>
                            <ExternalLink
                                href={format!("tel:{}", details.phone.replace(' ', ""))}
                                label={details.phone.clone()}
                            />
                        </div>
                        <div class="contact-item">
                            <span class="contact-label">{"Location"}</span>
                            <span>{details.location.clone()}</span>
                        </div>
                    </div>
                    <ContactForm owner={props.owner.clone()} whatsapp_number={props.whatsapp_number.clone()} />
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    owner: AttrValue,
    whatsapp_number: AttrValue,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactMessage::default);
    let sending = use_state_eq(|| false);
    let toaster = use_toaster();

    let oninput = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            dispatcher.dispatch(FormAction::Set(field, event_value(&event)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let toaster = toaster.clone();
        let owner = props.owner.clone();
        let number = props.whatsapp_number.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *sending {
                return;
            }

            let link = match form.deep_link(&number, &owner) {
                Ok(link) => link,
                Err(error) => {
                    warn!(%error, "contact form rejected");
                    notify(toaster.as_ref(), error.user_message(), ToastKind::Error);
                    return;
                }
            };

            sending.set(true);
            let dispatcher = form.dispatcher();
            let sending = sending.clone();
            let toaster = toaster.clone();

            spawn_local(async move {
                TimeoutFuture::new(as_millis_u32(SUBMIT_LATENCY)).await;

                if dom::open_in_new_tab(link.as_str()) {
                    info!(host = link.host_str().unwrap_or_default(), "opened chat deep link");
                } else {
                    warn!("browser blocked the chat deep link window");
                }

                notify(toaster.as_ref(), SUCCESS_MESSAGE, ToastKind::Success);
                dispatcher.dispatch(FormAction::Reset);
                sending.set(false);
            });
        })
    };

    let label = if *sending { PENDING_LABEL } else { SUBMIT_LABEL };

    html! {
        <form id="contact-form" class="contact-form" novalidate=true onsubmit={onsubmit}>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    value={form.name.clone()}
                    oninput={oninput(Field::Name)}
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    value={form.email.clone()}
                    oninput={oninput(Field::Email)}
                />
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    value={form.subject.clone()}
                    oninput={oninput(Field::Subject)}
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    value={form.message.clone()}
                    oninput={oninput(Field::Message)}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*sending}>
                {label}
            </button>
        </form>
    }
}

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::{info, warn};
use yew::prelude::*;

use crate::{
    timing::as_millis_u32,
    toast::{Toast, ToastId, ToastKind, ToastSlot},
};

pub enum ToastAction {
    Show { message: String, kind: ToastKind },
    Advance(ToastId),
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ToastAction::Show { message, kind } => {
                next.show(message, kind);
            }
            ToastAction::Advance(id) => {
                if !next.advance(id) {
                    return self;
                }
            }
        }

        Rc::new(next)
    }
}

/// Handle for raising toasts from anywhere under [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastSlot>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        info!(kind = kind.as_str(), text = %message, "toast");
        self.dispatcher.dispatch(ToastAction::Show { message, kind });
    }
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

/// Shows a toast, or logs the message when no provider is mounted.
pub fn notify(toaster: Option<&Toaster>, message: &str, kind: ToastKind) {
    match toaster {
        Some(toaster) => toaster.show(message, kind),
        None => warn!(kind = kind.as_str(), text = message, "no toast provider mounted"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let slot = use_reducer(ToastSlot::default);
    let toaster = Toaster {
        dispatcher: slot.dispatcher(),
    };

    {
        let dispatcher = slot.dispatcher();
        let stage = slot.current().map(|toast| (toast.id, toast.stage));
        // A new toast or stage replaces the deps, dropping (cancelling) the old timer.
        use_effect_with(stage, move |deps| {
            let timer = (*deps).map(|(id, stage)| {
                Timeout::new(as_millis_u32(stage.duration()), move || {
                    dispatcher.dispatch(ToastAction::Advance(id));
                })
            });
            move || drop(timer)
        });
    }

    html! {
        <ContextProvider<Toaster> context={toaster}>
            {props.children.clone()}
            if let Some(toast) = slot.current() {
                <ToastView toast={toast.clone()} />
            }
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let toast = &props.toast;
    let offset = if toast.stage.on_screen() { "0" } else { "100%" };
    let style = format!(
        "position: fixed; top: 20px; right: 20px; padding: 12px 20px; border-radius: 8px; \
         color: white; font-weight: 500; z-index: 10000; transition: transform 0.3s ease-out; \
         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); background-color: {}; transform: translateX({offset});",
        toast.kind.color()
    );

    html! {
        <div
            key={format!("toast-{:?}", toast.id)}
            class={classes!("notification", format!("notification--{}", toast.kind.as_str()))}
            role="status"
            aria-live="polite"
            style={style}
        >
            {toast.message.clone()}
        </div>
    }
}

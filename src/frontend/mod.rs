mod contact;
mod dom;
mod hero;
mod logging;
mod nav;
mod reveal;
mod sections;
mod toast;

use std::rc::Rc;

use tracing::{error, info, warn};
use web_sys::Element;
use yew::prelude::*;

use self::{
    contact::Contact,
    hero::Hero,
    nav::NavBar,
    sections::{About, Footer, Projects, Skills},
    toast::ToastProvider,
};
use crate::config::{LogLevel, SiteConfig};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;

    html! {
        <ToastProvider>
            <NavBar owner={config.owner.clone()} entries={config.nav.clone()} />
            <main id="content">
                <Hero
                    greeting={config.greeting.clone()}
                    tagline={config.tagline.clone()}
                    phrases={config.typing_phrases.clone()}
                />
                <About paragraphs={config.about.clone()} stats={config.stats.clone()} />
                <Skills groups={config.skill_groups.clone()} />
                <Projects filters={config.filters.clone()} projects={config.projects.clone()} />
                <Contact
                    owner={config.owner.clone()}
                    whatsapp_number={config.whatsapp_number.clone()}
                    details={config.contact.clone()}
                />
            </main>
            <Footer owner={config.owner.clone()} text={config.footer.clone()} />
        </ToastProvider>
    }
}

fn mount_point() -> Option<Element> {
    let document = dom::document()?;

    if let Some(root) = document.get_element_by_id("app") {
        return Some(root);
    }

    warn!("missing #app mount point, rendering into <body>");
    document.body().map(Element::from)
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            logging::init(LogLevel::default());
            error!(error = %err, "site config rejected, nothing to render");
            return;
        }
    };

    logging::init(config.log_level);
    info!(
        owner = %config.owner,
        log_level = config.log_level.as_str(),
        projects = config.projects.len(),
        "starting portfolio"
    );

    dom::mark_loaded();

    let Some(root) = mount_point() else {
        error!("no document to render into");
        return;
    };

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}

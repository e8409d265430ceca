use gloo_timers::callback::Timeout;
use tracing::debug;
use yew::prelude::*;

use super::reveal::{use_reveal, use_stagger, Reveal};
use crate::{
    config::{FilterOption, Project, SkillGroup, Stat},
    filter::{card_style, ProjectFilter},
    navigation::opens_new_tab,
    reveal::{RevealGroup, RevealOptions, STAGGER_ANIMATION},
    stats::{CounterRun, StatTarget},
    timing::as_millis_u32,
};

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    let new_tab = opens_new_tab(&props.href);

    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target={new_tab.then_some(AttrValue::Static("_blank"))}
            rel={new_tab.then_some(AttrValue::Static("noopener noreferrer"))}
        >
            {props.label.clone()}
            if new_tab {
                <span class="external-mark" aria-hidden="true">{"↗"}</span>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal class="section-header">
            <h2 class="section-title">{props.title.clone()}</h2>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct StatNumberProps {
    value: AttrValue,
}

/// Counts up from zero the first time the badge is half visible.
#[function_component(StatNumber)]
fn stat_number(props: &StatNumberProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::STAT);
    let target = use_memo(props.value.clone(), |value| StatTarget::parse(value));
    let run = use_state(|| None::<CounterRun>);

    {
        let run = run.clone();
        let target = target.clone();
        use_effect_with((revealed, (*run).clone()), move |(revealed, current)| {
            let mut timer = None;

            if *revealed {
                match (current, &*target) {
                    (None, Ok(target)) => run.set(Some(CounterRun::new(target.clone()))),
                    (None, Err(error)) => debug!(%error, "stat shown without animation"),
                    (Some(current), _) if !current.is_finished() => {
                        let mut next = current.clone();
                        let handle = run.clone();
                        timer = Some(Timeout::new(as_millis_u32(current.interval()), move || {
                            next.tick();
                            handle.set(Some(next));
                        }));
                    }
                    (Some(_), _) => {}
                }
            }

            move || drop(timer)
        });
    }

    let text = match run.as_ref() {
        Some(run) if run.current() > 0 || run.is_finished() => AttrValue::from(run.text()),
        _ => props.value.clone(),
    };

    html! {
        <span class="stat-number" ref={node}>{text}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <SectionHeader title="About Me" />
                <Reveal class="about-content">
                    <div class="about-text">
                        {for props.paragraphs.iter().map(|paragraph| html! { <p>{paragraph.clone()}</p> })}
                    </div>
                    <div class="about-stats">
                        {for props.stats.iter().map(|stat| html! {
                            <div class="stat" key={stat.label.clone()}>
                                <StatNumber value={stat.value.clone()} />
                                <span class="stat-label">{stat.label.clone()}</span>
                            </div>
                        })}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn stagger_style(index: usize, started: usize) -> Option<String> {
    (index < started).then(|| format!("animation: {STAGGER_ANIMATION};"))
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub groups: Vec<SkillGroup>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let grid = use_node_ref();
    let revealed = use_reveal(grid.clone(), RevealOptions::SECTION);
    let started = use_stagger(revealed, props.groups.len(), RevealGroup::Skills.stagger());

    html! {
        <section id="skills" class="skills">
            <div class="container">
                <SectionHeader title="Skills" />
                <div ref={grid} class={classes!("skills-grid", "fade-in", revealed.then_some("visible"))}>
                    {for props.groups.iter().enumerate().map(|(index, group)| html! {
                        <div class="skill-card" key={group.title.clone()} style={stagger_style(index, started)}>
                            <h3 class="skill-title">{group.title.clone()}</h3>
                            <ul class="skill-list">
                                {for group.skills.iter().map(|skill| html! { <li class="skill-tag">{skill.clone()}</li> })}
                            </ul>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub filters: Vec<FilterOption>,
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let grid = use_node_ref();
    let revealed = use_reveal(grid.clone(), RevealOptions::SECTION);
    let started = use_stagger(revealed, props.projects.len(), RevealGroup::Projects.stagger());
    let filter = use_state_eq(ProjectFilter::default);
    let filter_applied = use_state_eq(|| false);

    let buttons = props.filters.iter().map(|option| {
        let selected = ProjectFilter::from_value(&option.value);
        let is_active = *filter == selected;
        let onclick = {
            let filter = filter.clone();
            let filter_applied = filter_applied.clone();
            Callback::from(move |_: MouseEvent| {
                debug!(filter = selected.value(), "project filter selected");
                filter.set(selected.clone());
                filter_applied.set(true);
            })
        };

        html! {
            <button
                type="button"
                key={option.value.clone()}
                class={classes!("filter-btn", is_active.then_some("active"))}
                data-filter={option.value.clone()}
                aria-pressed={is_active.to_string()}
                onclick={onclick}
            >
                {option.label.clone()}
            </button>
        }
    });

    let cards = props.projects.iter().enumerate().map(|(index, project)| {
        let style = card_style(&filter, &project.category, *filter_applied)
            .or_else(|| stagger_style(index, started));

        html! {
            <article class="project-card" key={project.title.clone()} data-category={project.category.clone()} style={style}>
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <ul class="project-tags">
                    {for project.tags.iter().map(|tag| html! { <li class="project-tag">{tag.clone()}</li> })}
                </ul>
                <div class="project-links">
                    {for project.links.iter().map(|link| html! {
                        <ExternalLink href={link.href.clone()} label={link.label.clone()} class="project-link" />
                    })}
                </div>
            </article>
        }
    });

    html! {
        <section id="projects" class="projects">
            <div class="container">
                <SectionHeader title="Projects" />
                <div class="project-filters" role="toolbar" aria-label="Filter projects">
                    {for buttons}
                </div>
                <div ref={grid} class={classes!("projects-grid", "fade-in", revealed.then_some("visible"))}>
                    {for cards}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    pub text: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{format!("© {} · {}", props.owner, props.text)}</p>
            </div>
        </footer>
    }
}

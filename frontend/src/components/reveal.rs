use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{supports_intersection, VisibilityWatch};
use crate::config;

/// Entrance animation applied once a section has been seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Entrance {
    FadeIn,
    #[default]
    SlideUp,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeIn => "animate-fade-in",
            Entrance::SlideUp => "animate-slide-up",
        }
    }
}

/// Why a section was shown without waiting to be scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    NoWindow,
    NoElement,
    Unsupported,
    ObserverFailed,
}

impl Fallback {
    fn describe(self) -> &'static str {
        match self {
            Fallback::NoWindow => "no window",
            Fallback::NoElement => "section not mounted",
            Fallback::Unsupported => "IntersectionObserver unavailable",
            Fallback::ObserverFailed => "observer could not be created",
        }
    }
}

/// Picks the element to watch, or the reason there is nothing to watch.
pub fn plan_reveal<W, E>(
    window: Option<W>,
    element: Option<E>,
    supported: impl FnOnce(&W) -> bool,
) -> Result<E, Fallback> {
    let window = window.ok_or(Fallback::NoWindow)?;
    let element = element.ok_or(Fallback::NoElement)?;
    if !supported(&window) {
        return Err(Fallback::Unsupported);
    }
    Ok(element)
}

/// Keeps a live watch, or runs `show` so the section is not stuck hidden.
pub fn settle_reveal<W>(outcome: Result<W, Fallback>, show: impl FnOnce()) -> Option<W> {
    match outcome {
        Ok(watch) => Some(watch),
        Err(reason) => {
            warn!("Showing section directly: {}", reason.describe());
            show();
            None
        }
    }
}

/// Latches to `true` the first time `node` is at least `threshold` visible.
#[hook]
pub fn use_reveal_once(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = {
                    let visible = visible.clone();
                    move || visible.set(true)
                };
                let outcome = plan_reveal(web_sys::window(), node.cast::<Element>(), supports_intersection)
                    .and_then(|element| {
                        VisibilityWatch::observe(&element, threshold, on_visible).map_err(|e| {
                            warn!("IntersectionObserver error: {:?}", e);
                            Fallback::ObserverFailed
                        })
                    });
                let watch = settle_reveal(outcome, move || visible.set(true));
                move || drop(watch)
            },
            (),
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub entrance: Entrance,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal_once(node.clone(), config::REVEAL_THRESHOLD);

    let state_class = if visible { props.entrance.class() } else { "reveal-hidden" };

    html! {
        <div ref={node} class={classes!(props.class.clone(), state_class)}>
            { for props.children.iter() }
        </div>
    }
}

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::components::icons::Star;
use crate::config;
use crate::content::Testimonial;

/// Active slot of a fixed-length rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub index: usize,
    pub len: usize,
}

pub enum RotationAction {
    Advance,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn advanced(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RotationAction::Advance => Rc::new(self.advanced()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub testimonials: Rc<[Testimonial]>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let len = props.testimonials.len();
    let rotation = use_reducer(|| Rotation::new(len));

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_ROTATE_MS, move || {
                    debug!("Advancing testimonial carousel");
                    dispatcher.dispatch(RotationAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="carousel">
            { for props.testimonials.iter().enumerate().map(|(index, testimonial)| {
                let opacity = if rotation.is_active(index) { "slide-active" } else { "slide-idle" };
                html! {
                    <div key={index} class={classes!("slide", opacity)}>
                        <div class="testimonial-card">
                            <div class="stars">
                                { for (0..5).map(|i| html! { <Star key={i} class="star" /> }) }
                            </div>
                            <p class="testimonial-text">{ format!("\"{}\"", testimonial.text) }</p>
                            <div class="testimonial-author">
                                <img src={testimonial.avatar_url()} alt={testimonial.name.clone()} class="avatar" />
                                <div>
                                    <p class="author-name">{ &testimonial.name }</p>
                                    <p class="author-role">{ &testimonial.role }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use yew::ServerRenderer;

    fn fire(rotation: Rotation, times: usize) -> Rotation {
        (0..times).fold(rotation, |r, _| r.advanced())
    }

    #[test]
    fn three_items_wrap_after_three_firings() {
        let start = Rotation::new(3);
        assert_eq!(start.index, 0);
        assert_eq!(fire(start, 2).index, 2);
        assert_eq!(fire(start, 3).index, 0);
    }

    #[test]
    fn index_is_firings_mod_len() {
        for len in 1..=7 {
            for k in 0..30 {
                assert_eq!(fire(Rotation::new(len), k).index, k % len);
            }
        }
    }

    #[test]
    fn exactly_one_active() {
        let mut rotation = Rotation::new(4);
        for _ in 0..10 {
            let active = (0..4).filter(|i| rotation.is_active(*i)).count();
            assert_eq!(active, 1);
            rotation = rotation.advanced();
        }
    }

    #[test]
    fn single_item_never_moves() {
        assert_eq!(fire(Rotation::new(1), 9).index, 0);
    }

    #[test]
    fn reducer_advances() {
        let next = Rc::new(Rotation::new(2)).reduce(RotationAction::Advance);
        assert_eq!(next.index, 1);
        let wrapped = next.reduce(RotationAction::Advance);
        assert_eq!(wrapped.index, 0);
    }

    #[tokio::test]
    async fn first_testimonial_is_shown_first() {
        let html = ServerRenderer::<TestimonialCarousel>::with_props(|| CarouselProps {
            testimonials: Catalog::load().unwrap().testimonials.into(),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("slide-active").count(), 1);
        assert_eq!(html.matches("slide-idle").count(), 2);
        let active = html.find("slide-active").unwrap();
        let lucas = html.find("Lucas M.").unwrap();
        let juliana = html.find("Juliana P.").unwrap();
        assert!(active < lucas && lucas < juliana);
        assert!(html.contains("https://i.pravatar.cc/150?u=a042581f4e29026705d"));
    }
}

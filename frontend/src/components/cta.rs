use yew::prelude::*;

use crate::content::use_catalog;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub pulsing: bool,
}

/// Call-to-action link. Every instance points at the checkout URL from the
/// catalog in context; clicking it is a plain navigation.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let href = use_catalog().offer.checkout_url.clone();

    html! {
        <a href={href} class={classes!("cta-button", props.pulsing.then(|| "animate-subtle-pulse"), props.class.clone())}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::content::Catalog;
    use yew::ServerRenderer;

    #[function_component(ProvidedCta)]
    fn provided_cta() -> Html {
        let catalog = Rc::new(Catalog::load().unwrap());
        html! {
            <ContextProvider<Rc<Catalog>> context={catalog}>
                <CtaButton pulsing={true}>{"QUERO AGORA"}</CtaButton>
            </ContextProvider<Rc<Catalog>>>
        }
    }

    #[tokio::test]
    async fn links_to_checkout_from_context() {
        let html = ServerRenderer::<ProvidedCta>::new().hydratable(false).render().await;
        let checkout = Catalog::load().unwrap().offer.checkout_url;

        assert!(checkout.starts_with("https://pay.kirvano.com/"));
        assert!(html.contains(&format!("href=\"{}\"", checkout)));
        assert!(html.contains("animate-subtle-pulse"));
        assert!(html.contains("QUERO AGORA"));
    }

    #[tokio::test]
    async fn renders_without_target_outside_a_provider() {
        let html = ServerRenderer::<CtaButton>::with_props(|| CtaButtonProps {
            children: Children::new(vec![html! { "QUERO AGORA" }]),
            class: Classes::new(),
            pulsing: false,
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("cta-button"));
        assert!(html.contains("QUERO AGORA"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("animate-subtle-pulse"));
    }
}

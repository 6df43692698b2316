use yew::prelude::*;

use crate::components::icons::ChevronDown;
use crate::content::FaqItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Expanded
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub item: FaqItem,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let state = use_state(Disclosure::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggled()))
    };

    let open = state.is_open();

    html! {
        <div class={classes!("faq-item", open.then(|| "open"))}>
            <button type="button" class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.item.question }</span>
                <ChevronDown class={classes!("chevron", open.then(|| "rotate-180"))} />
            </button>
            <div class={classes!("faq-answer", if open { "max-h-open" } else { "max-h-0" })}>
                <p>{ &props.item.answer }</p>
            </div>
        </div>
    }
}

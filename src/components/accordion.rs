use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub expanded: bool,
    /// Receives this item's id when the trigger is clicked.
    pub on_toggle: Callback<AttrValue>,
    pub children: Children,
}

/// Disclosure row whose open state is owned by the parent.
#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let toggle = {
        let id = props.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div class={classes!("accordion-item", props.expanded.then(|| "open"))}>
            <button class="accordion-trigger" onclick={toggle} aria-expanded={props.expanded.to_string()}>
                <span class="help-icon">{"?"}</span>
                <span class="accordion-title">{&props.title}</span>
                <span class="toggle-icon">{if props.expanded { "▲" } else { "▼" }}</span>
            </button>
            if props.expanded {
                <div class="accordion-content">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

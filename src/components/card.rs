use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let has_header = props.title.is_some() || props.description.is_some();

    html! {
        <div class={classes!("card", props.class.clone())}>
            if has_header {
                <div class="card-header">
                    if let Some(title) = &props.title {
                        <h3 class="card-title">{title}</h3>
                    }
                    if let Some(description) = &props.description {
                        <p class="card-description">{description}</p>
                    }
                </div>
            }
            <div class="card-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}

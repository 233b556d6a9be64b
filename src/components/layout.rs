use yew::prelude::*;
use web_sys::window;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    /// Page name shown before the brand in the tab title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Outer wrapper for every screen: keeps the document head in sync with the page.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    {
        let title = config::page_title(props.title.as_deref());
        use_effect_with_deps(
            move |title: &String| {
                match window().and_then(|w| w.document()) {
                    Some(document) => {
                        document.set_title(title);
                        match document.query_selector("meta[name=\"description\"]") {
                            Ok(Some(meta)) => {
                                let _ = meta.set_attribute("content", config::BRAND_DESCRIPTION);
                            }
                            Ok(None) => log::debug!("No description meta tag to update"),
                            Err(err) => log::warn!("Failed to query description meta: {:?}", err),
                        }
                    }
                    None => log::warn!("No document available, skipping head update"),
                }
                || ()
            },
            title,
        );
    }

    html! {
        <div class={classes!("page-shell", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

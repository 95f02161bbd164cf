use crate::element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub data: Option<models::RecipeCardData>,
}

/// Renders a `<recipe-card>` element and binds `data` whenever it changes.
#[function_component(RecipeCard)]
pub fn recipe_card(Props { data }: &Props) -> Html {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();

        use_effect_with_deps(
            move |data: &Option<models::RecipeCardData>| {
                if let (Some(data), Some(node)) = (data, node_ref.get()) {
                    if let Err(err) = element::set_data(&node, data) {
                        log::error!("{}", err);
                    }
                }
                || ()
            },
            data.clone(),
        );
    }

    html! { <recipe-card ref={node_ref} /> }
}

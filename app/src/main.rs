#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod components;
mod element;
mod mount;

use components::RecipeCard;
use yew::prelude::*;

const SAMPLE_RECIPES: &str = include_str!("../recipes.json");

fn sample_recipes() -> Vec<models::RecipeCardData> {
    match serde_json::from_str(SAMPLE_RECIPES) {
        Ok(recipes) => recipes,
        Err(err) => {
            log::error!("sample recipes: {}", err);
            Vec::new()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let recipes = use_state(sample_recipes);

    html! {
        <main class="cards">
            { for recipes.iter().cloned().map(|data| html! { <RecipeCard data={Some(data)} /> }) }
        </main>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = element::define() {
        log::error!("{}", err);
        return;
    }

    yew::start_app::<App>();
}

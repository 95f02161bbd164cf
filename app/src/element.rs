//! Registration of `<recipe-card>` as a browser custom element.
//!
//! The element class lives in a few lines of JavaScript because wasm cannot extend
//! `HTMLElement` directly; construction and binding call back into Rust.

use crate::mount;
use anyhow::{anyhow, Result};
use card::{CardState, RecipeCard, TAG_NAME};
use gloo_utils::format::JsValueSerdeExt;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::ShadowRoot;

#[wasm_bindgen(inline_js = r#"
export function define_element(tag, construct, bind) {
    if (customElements.get(tag)) {
        return false;
    }

    customElements.define(tag, class extends HTMLElement {
        constructor() {
            super();
            construct(this.attachShadow({ mode: "open" }));
        }

        set data(data) {
            bind(this.shadowRoot, data);
        }
    });

    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(
        tag: &str,
        construct: &Closure<dyn Fn(ShadowRoot)>,
        bind: &Closure<dyn Fn(ShadowRoot, JsValue)>,
    ) -> std::result::Result<bool, JsValue>;
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

/// Populate a fresh shadow root with the card shell.
fn construct_shell(shadow: &ShadowRoot) -> Result<()> {
    let card = RecipeCard::new();
    let document = gloo_utils::document();

    mount::append(&document, shadow, card.shadow_root().children()).map_err(js_error)
}

/// Replace the article's content with `data`; falsy values leave it untouched.
fn bind_data(shadow: &ShadowRoot, data: &JsValue) -> Result<()> {
    let value: serde_json::Value = data.into_serde()?;

    let mut card = RecipeCard::new();
    card.set_data_value(&value)?;

    if card.state() == CardState::Empty {
        return Ok(());
    }

    let rendered = card
        .article()
        .ok_or_else(|| anyhow!("card shell has no article"))?;

    let article = shadow
        .query_selector("article")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("shadow root has no article"))?;

    let document = gloo_utils::document();
    mount::clear(&article);
    mount::append(&document, &article, rendered.children()).map_err(js_error)
}

/// Define `<recipe-card>` on the current window. Defining it twice is a no-op.
pub fn define() -> Result<()> {
    let construct = Closure::wrap(Box::new(|shadow: ShadowRoot| {
        if let Err(err) = construct_shell(&shadow) {
            error!("constructing {}: {}", TAG_NAME, err);
        }
    }) as Box<dyn Fn(ShadowRoot)>);

    let bind = Closure::wrap(Box::new(|shadow: ShadowRoot, data: JsValue| {
        if let Err(err) = bind_data(&shadow, &data) {
            error!("binding {}: {}", TAG_NAME, err);
        }
    }) as Box<dyn Fn(ShadowRoot, JsValue)>);

    if define_element(TAG_NAME, &construct, &bind).map_err(js_error)? {
        info!("defined custom element `{}`", TAG_NAME);

        // The element class keeps calling these for as long as the page lives.
        construct.forget();
        bind.forget();
    }

    Ok(())
}

/// Assign `data` to the `data` property of a `<recipe-card>` element.
pub fn set_data(element: &web_sys::Node, data: &models::RecipeCardData) -> Result<()> {
    let value = JsValue::from_serde(data)?;
    js_sys::Reflect::set(element, &JsValue::from_str("data"), &value).map_err(js_error)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn shadow_root(element: &web_sys::Element) -> ShadowRoot {
        element.shadow_root().unwrap()
    }

    #[wasm_bindgen_test]
    fn defining_twice_is_a_no_op() {
        define().unwrap();
        define().unwrap();

        let element = gloo_utils::document().create_element(TAG_NAME).unwrap();
        let shadow = shadow_root(&element);

        assert_eq!(shadow.child_nodes().length(), 2);
        assert!(shadow.query_selector("style").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn data_setter_renders_and_replaces() {
        define().unwrap();

        let element = gloo_utils::document().create_element(TAG_NAME).unwrap();
        let node: &web_sys::Node = &element;

        let data = models::RecipeCardData {
            title_text: "<b>Soup</b>".into(),
            ingredients: serde_json::from_str(r#"["salt","water"]"#).unwrap(),
            ..Default::default()
        };
        set_data(node, &data).unwrap();
        set_data(node, &data).unwrap();

        let article = shadow_root(&element)
            .query_selector("article")
            .unwrap()
            .unwrap();

        assert_eq!(article.child_element_count(), 6);
        assert_eq!(
            article.query_selector("a").unwrap().unwrap().text_content().unwrap(),
            "<b>Soup</b>"
        );
        assert_eq!(
            article
                .query_selector("p.ingredients")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            "salt,water"
        );
    }
}

//! Mirror `card::dom` trees into the browser DOM.

use card::dom;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Create a DOM node for `node`. Text always becomes a text node, never parsed markup.
pub fn node(document: &Document, node: &dom::Node) -> Result<web_sys::Node, JsValue> {
    match node {
        dom::Node::Text(text) => Ok(document.create_text_node(text).into()),
        dom::Node::Element(element) => {
            let target = document.create_element(element.tag_name())?;

            for (name, value) in element.attributes() {
                target.set_attribute(name, value)?;
            }

            append(document, &target, element.children())?;
            Ok(target.into())
        }
    }
}

pub fn append(
    document: &Document,
    parent: &web_sys::Node,
    nodes: &[dom::Node],
) -> Result<(), JsValue> {
    for child in nodes {
        parent.append_child(&node(document, child)?)?;
    }

    Ok(())
}

/// Remove all children of `parent`.
pub fn clear(parent: &web_sys::Node) {
    parent.set_text_content(None);
}

//! Static pre-rendering of cards for hosts without wasm.

use crate::card::TAG_NAME;
use crate::dom::escape;
use crate::registry::Registry;
use crate::Result;
use log::debug;
use serde_json::Value;

/// Render `records` as a sequence of `<recipe-card>` elements.
///
/// `records` is either a single record or an array of them; falsy entries produce empty cards.
pub fn render(registry: &Registry, records: &Value) -> Result<String> {
    let records = match records {
        Value::Array(records) => records.as_slice(),
        record => std::slice::from_ref(record),
    };

    let mut html = String::new();

    for record in records {
        let mut card = registry.create_element(TAG_NAME)?;
        card.set_property("data", record)?;
        html.push_str(&card.to_string());
        html.push('\n');
    }

    debug!("rendered {} cards", records.len());
    Ok(html)
}

/// Wrap rendered cards in a minimal HTML document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_single_record_and_arrays() {
        let registry = Registry::with_recipe_card().unwrap();

        let single = render(&registry, &json!({ "titleTxt": "Soup" })).unwrap();
        assert_eq!(single.matches("<recipe-card>").count(), 1);

        let many = render(&registry, &json!([{ "titleTxt": "Soup" }, null, { "titleTxt": "Stew" }]))
            .unwrap();
        assert_eq!(many.matches("<recipe-card>").count(), 3);
        assert_eq!(many.matches("<article></article>").count(), 1);
    }

    #[test]
    fn requires_a_defined_card() {
        assert!(render(&Registry::new(), &json!({})).is_err());
    }

    #[test]
    fn document_escapes_title() {
        let page = document("Fish & Chips", "<recipe-card></recipe-card>\n");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Fish &amp; Chips</title>"));
        assert!(page.contains("<main>\n<recipe-card></recipe-card>\n</main>"));
    }
}

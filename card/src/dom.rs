//! Minimal markup tree.
//!
//! Text and attribute values are stored verbatim and only escaped when written out, so nothing a
//! record contains can turn into structure.

use std::fmt::{self, Write};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Set `name` to `value`, replacing an existing value in place.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();

        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_owned(), value)),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn class_name(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.append_child(node);
        self
    }

    /// Replace all children with a single text node.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text_content(text);
        self
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// First descendant element with the given tag name, depth first.
    pub fn query_selector(&self, tag_name: &str) -> Option<&Element> {
        find(&self.children, tag_name)
    }

    pub fn query_selector_mut(&mut self, tag_name: &str) -> Option<&mut Element> {
        find_mut(&mut self.children, tag_name)
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag_name.as_str())
    }

    fn is_raw_text(&self) -> bool {
        RAW_TEXT_ELEMENTS.contains(&self.tag_name.as_str())
    }
}

fn find<'a>(nodes: &'a [Node], tag_name: &str) -> Option<&'a Element> {
    nodes.iter().filter_map(Node::as_element).find_map(|element| {
        if element.tag_name == tag_name {
            Some(element)
        } else {
            element.query_selector(tag_name)
        }
    })
}

fn find_mut<'a>(nodes: &'a mut [Node], tag_name: &str) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(element) = node {
            if element.tag_name == tag_name {
                return Some(element);
            }

            if let Some(found) = element.query_selector_mut(tag_name) {
                return Some(found);
            }
        }
    }

    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowRootMode {
    Open,
}

impl ShadowRootMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowRootMode::Open => "open",
        }
    }
}

/// Encapsulated subtree attached to a host element.
///
/// Serialized as a declarative shadow root (`<template shadowrootmode>`), which browsers attach
/// to the enclosing element while parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowRoot {
    mode: ShadowRootMode,
    children: Vec<Node>,
}

impl ShadowRoot {
    pub fn new(mode: ShadowRootMode) -> Self {
        Self {
            mode,
            children: Vec::new(),
        }
    }

    pub fn mode(&self) -> ShadowRootMode {
        self.mode
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn query_selector(&self, tag_name: &str) -> Option<&Element> {
        find(&self.children, tag_name)
    }

    pub fn query_selector_mut(&mut self, tag_name: &str) -> Option<&mut Element> {
        find_mut(&mut self.children, tag_name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Text(text) => write!(f, "{}", v_htmlescape::escape(text)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;

        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, v_htmlescape::escape(value))?;
        }

        f.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        if self.is_raw_text() {
            for child in &self.children {
                f.write_str(&child.text_content())?;
            }
        } else {
            for child in &self.children {
                fmt::Display::fmt(child, f)?;
            }
        }

        write!(f, "</{}>", self.tag_name)
    }
}

impl fmt::Display for ShadowRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<template shadowrootmode=\"{}\">", self.mode.as_str())?;

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }

        f.write_str("</template>")
    }
}

/// Escape `text` for use as element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_replaces() {
        let mut element = Element::new("a").with_attribute("href", "/a");
        element.set_attribute("href", "/b");

        assert_eq!(element.attribute("href"), Some("/b"));
        assert_eq!(element.attributes().count(), 1);
    }

    #[test]
    fn text_content_replaces_children() {
        let mut element = Element::new("p").with_child(Element::new("b").with_text("bold"));
        assert_eq!(element.text_content(), "bold");

        element.set_text_content("plain");
        assert_eq!(element.children(), &[Node::Text("plain".into())]);
    }

    #[test]
    fn query_selector_is_depth_first() {
        let tree = Element::new("div")
            .with_child(Element::new("p").with_child(Element::new("span").with_text("inner")))
            .with_child(Element::new("span").with_text("outer"));

        assert_eq!(tree.query_selector("span").unwrap().text_content(), "inner");
        assert!(tree.query_selector("img").is_none());
    }

    #[test]
    fn serializes_void_and_raw_text_elements() {
        let img = Element::new("img").with_attribute("src", "a.jpg");
        assert_eq!(img.to_string(), r#"<img src="a.jpg">"#);

        let style = Element::new("style").with_text("a > b { color: red; }");
        assert_eq!(style.to_string(), "<style>a > b { color: red; }</style>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let link = Element::new("a")
            .with_attribute("href", r#"/x" onclick="alert(1)"#)
            .with_text("<b>Fish & Chips</b>");

        assert_eq!(
            link.to_string(),
            r#"<a href="&#x2f;x&quot; onclick=&quot;alert(1)">&lt;b&gt;Fish &amp; Chips&lt;&#x2f;b&gt;</a>"#
        );
    }

    #[test]
    fn escape_covers_quotes_and_slashes() {
        assert_eq!(
            escape(r#"it's "a/b" & <c>"#),
            "it&#x27;s &quot;a&#x2f;b&quot; &amp; &lt;c&gt;"
        );
    }

    #[test]
    fn shadow_root_is_declarative() {
        let mut root = ShadowRoot::new(ShadowRootMode::Open);
        root.append_child(Element::new("article"));

        assert_eq!(
            root.to_string(),
            r#"<template shadowrootmode="open"><article></article></template>"#
        );
    }
}

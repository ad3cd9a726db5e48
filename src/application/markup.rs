//! Structured markup for rendered views.
//!
//! Views build `Element` trees instead of interpolating strings; escaping
//! happens once, in [`Element::to_html`].

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(value.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    pub fn element_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.get_attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.get_attr("class") else {
            return;
        };
        let kept = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if kept.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", kept);
        }
    }

    /// Depth-first search for a descendant (or self) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(el) => el.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(el) => el.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Detach the first descendant with the given id. Returns whether one was found.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.children.len();
        self.children
            .retain(|child| !matches!(child, Node::Element(el) if el.element_id() == Some(id)));
        if self.children.len() != before {
            return true;
        }
        self.children.iter_mut().any(|child| match child {
            Node::Element(el) => el.remove_by_id(id),
            Node::Text(_) => false,
        })
    }

    /// All descendant elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(el) = child {
                if el.has_class(class) {
                    found.push(el);
                }
                el.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of all descendants, like `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let el = Element::new("div")
            .attr("title", "\"quoted\" & <b>")
            .text("<script>alert(1)</script>");
        assert_eq!(
            el.to_html(),
            "<div title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">&lt;script&gt;alert(1)&lt;/script&gt;</div>"
        );
    }

    #[test]
    fn test_find_by_id_searches_descendants() {
        let mut root = Element::new("div").child(
            Element::new("ul").child(Element::new("li").id("target").text("hit")),
        );
        assert_eq!(root.find_by_id("target").unwrap().text_content(), "hit");
        assert!(root.find_by_id("missing").is_none());

        root.find_by_id_mut("target").unwrap().set_attr("data-x", "1");
        assert_eq!(root.find_by_id("target").unwrap().get_attr("data-x"), Some("1"));
    }

    #[test]
    fn test_class_helpers() {
        let mut el = Element::new("main");
        el.add_class("is-loading");
        el.add_class("is-loading");
        assert_eq!(el.get_attr("class"), Some("is-loading"));

        el.add_class("wide");
        assert!(el.has_class("wide"));
        el.remove_class("is-loading");
        assert_eq!(el.get_attr("class"), Some("wide"));
    }

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::new("div").attr("aria-hidden", "true");
        el.set_attr("aria-hidden", "false");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.get_attr("aria-hidden"), Some("false"));
        el.remove_attr("aria-hidden");
        assert!(el.attrs.is_empty());
    }

    #[test]
    fn test_text_content_concatenates() {
        let el = Element::new("div")
            .text("Renews on ")
            .child(Element::new("strong").text("March 18, 2026"));
        assert_eq!(el.text_content(), "Renews on March 18, 2026");
        assert_eq!(el.find_by_class("missing").len(), 0);
    }
}

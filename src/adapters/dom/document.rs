use std::sync::{Arc, Mutex, Weak};

use crate::application::{markup::Element, ports::control::Control};

pub const PAGE_CONTAINER: &str = "page";

pub type SharedDocument = Arc<Mutex<Document>>;

/// The host page: a list of top-level containers addressed by id.
///
/// Renderers replace a container's children wholesale; a missing container
/// means the page does not show that part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    containers: Vec<Element>,
}

impl Document {
    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            containers: ids.iter().map(|id| Element::new("div").id(*id)).collect(),
        }
    }

    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.container(id).is_some()
    }

    pub fn container(&self, id: &str) -> Option<&Element> {
        self.containers.iter().find(|c| c.element_id() == Some(id))
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.containers
            .iter_mut()
            .find(|c| c.element_id() == Some(id))
    }

    /// Replace everything inside container `id`. Returns false if it does not exist.
    pub fn replace_children(&mut self, id: &str, children: Vec<Element>) -> bool {
        match self.container_mut(id) {
            Some(container) => {
                container.children = children.into_iter().map(Into::into).collect();
                true
            }
            None => false,
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.containers.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.containers.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// Whether `target` is `ancestor` itself or nested inside it.
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        self.element_by_id(ancestor)
            .is_some_and(|el| el.find_by_id(target).is_some())
    }

    pub fn remove_element(&mut self, id: &str) -> bool {
        self.containers.iter_mut().any(|c| c.remove_by_id(id))
    }

    pub fn to_html(&self) -> String {
        self.containers
            .iter()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A control looked up by id each time it is touched.
///
/// Holds the document weakly: once the page or the element is gone, writes
/// are dropped.
pub struct ElementHandle {
    document: Weak<Mutex<Document>>,
    id: String,
}

impl ElementHandle {
    pub fn new(document: &SharedDocument, id: impl Into<String>) -> Self {
        Self {
            document: Arc::downgrade(document),
            id: id.into(),
        }
    }
}

impl Control for ElementHandle {
    fn set_disabled(&self, disabled: bool) {
        let Some(document) = self.document.upgrade() else {
            tracing::debug!(id = %self.id, "Page closed before control update");
            return;
        };
        let Ok(mut document) = document.lock() else {
            return;
        };
        match document.element_by_id_mut(&self.id) {
            Some(el) if disabled => el.set_attr("disabled", ""),
            Some(el) => el.remove_attr("disabled"),
            None => tracing::debug!(id = %self.id, "Control left the page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::with_containers(&["topbar", PAGE_CONTAINER]);
        doc.replace_children(
            "topbar",
            vec![Element::new("div").id("menu").child(Element::new("button").id("logout"))],
        );
        doc
    }

    #[test]
    fn test_replace_children_in_missing_container() {
        let mut doc = Document::with_containers(&[PAGE_CONTAINER]);
        assert!(!doc.replace_children("membershipSummary", vec![Element::new("p")]));
        assert_eq!(doc, Document::with_containers(&[PAGE_CONTAINER]));
    }

    #[test]
    fn test_replace_children_overwrites() {
        let mut doc = sample();
        assert!(doc.replace_children("topbar", vec![Element::new("p").text("fresh")]));
        assert!(doc.element_by_id("menu").is_none());
        assert_eq!(doc.container("topbar").unwrap().text_content(), "fresh");
    }

    #[test]
    fn test_contains() {
        let doc = sample();
        assert!(doc.contains("menu", "logout"));
        assert!(doc.contains("menu", "menu"));
        assert!(doc.contains("topbar", "logout"));
        assert!(!doc.contains("logout", "menu"));
        assert!(!doc.contains("missing", "logout"));
    }

    #[test]
    fn test_element_handle_toggles_disabled() {
        let doc = sample().into_shared();
        let handle = ElementHandle::new(&doc, "logout");

        handle.set_disabled(true);
        assert_eq!(
            doc.lock().unwrap().element_by_id("logout").unwrap().get_attr("disabled"),
            Some("")
        );

        handle.set_disabled(false);
        assert!(doc.lock().unwrap().element_by_id("logout").unwrap().get_attr("disabled").is_none());
    }

    #[test]
    fn test_element_handle_after_removal_is_noop() {
        let doc = sample().into_shared();
        let handle = ElementHandle::new(&doc, "logout");

        assert!(doc.lock().unwrap().remove_element("logout"));
        handle.set_disabled(false);
        assert!(doc.lock().unwrap().element_by_id("logout").is_none());

        drop(doc);
        handle.set_disabled(false);
    }

    #[test]
    fn test_to_html_lists_containers_in_order() {
        let doc = Document::with_containers(&["topbar", PAGE_CONTAINER]);
        assert_eq!(doc.to_html(), "<div id=\"topbar\"></div>\n<div id=\"page\"></div>");
    }
}

use super::document::Document;

pub const LOADING_CLASS: &str = "is-loading";

/// Mark a container as loading. Missing containers are ignored.
pub fn set_loading(document: &mut Document, container_id: &str) {
    if let Some(container) = document.container_mut(container_id) {
        container.add_class(LOADING_CLASS);
    }
}

pub fn clear_loading(document: &mut Document, container_id: &str) {
    if let Some(container) = document.container_mut(container_id) {
        container.remove_class(LOADING_CLASS);
    }
}

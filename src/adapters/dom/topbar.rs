use crate::{
    app_error::AppResult,
    application::{
        use_cases::session::SessionUseCases,
        views::topbar::{
            ActiveLink, LOGOUT_BUTTON_ID, PROFILE_BUTTON_ID, PROFILE_MENU_ID, TOPBAR_CONTAINER,
            TopbarView, aria_hidden,
        },
    },
};

use super::document::Document;

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A click; `target` is the id of the clicked element, `None` for bare page area.
    Click { target: Option<String> },
    /// The tab is about to leave the page.
    BeforeUnload,
}

impl PageEvent {
    pub fn click(target: &str) -> Self {
        PageEvent::Click {
            target: Some(target.to_string()),
        }
    }

    pub fn click_outside() -> Self {
        PageEvent::Click { target: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    ToggleMenu,
    SignOut,
    CloseOnOutsideClick,
    CloseBeforeUnload,
}

/// A mounted topbar and the listeners it owns.
pub struct Topbar {
    session: SessionUseCases,
    listeners: Vec<Listener>,
}

impl Topbar {
    /// Draw the topbar and attach its listeners.
    ///
    /// Returns `None` when the page has no topbar container. In test mode the
    /// before-unload listener is not attached.
    pub fn mount(
        document: &mut Document,
        session: SessionUseCases,
        active: ActiveLink,
        test_mode: bool,
    ) -> Option<Self> {
        let view = TopbarView::new(active);
        if !document.replace_children(TOPBAR_CONTAINER, vec![view.render()]) {
            return None;
        }

        let mut listeners = vec![
            Listener::ToggleMenu,
            Listener::SignOut,
            Listener::CloseOnOutsideClick,
        ];
        if !test_mode {
            listeners.push(Listener::CloseBeforeUnload);
        }

        Some(Self { session, listeners })
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Drop every listener; later events are ignored.
    pub fn detach(&mut self) {
        self.listeners.clear();
    }

    pub fn is_menu_open(document: &Document) -> bool {
        document
            .element_by_id(PROFILE_MENU_ID)
            .and_then(|menu| menu.get_attr("aria-hidden"))
            == Some("false")
    }

    /// Run the attached listeners for `event` in registration order.
    pub fn dispatch(&self, document: &mut Document, event: &PageEvent) -> AppResult<()> {
        for listener in &self.listeners {
            match (listener, event) {
                (Listener::ToggleMenu, PageEvent::Click { target: Some(id) })
                    if document.contains(PROFILE_BUTTON_ID, id) =>
                {
                    let open = Self::is_menu_open(document);
                    set_menu_open(document, !open);
                }
                (Listener::SignOut, PageEvent::Click { target: Some(id) })
                    if document.contains(LOGOUT_BUTTON_ID, id) =>
                {
                    self.session.sign_out()?;
                }
                (Listener::CloseOnOutsideClick, PageEvent::Click { target }) => {
                    let inside = target.as_deref().is_some_and(|id| {
                        document.contains(PROFILE_BUTTON_ID, id)
                            || document.contains(PROFILE_MENU_ID, id)
                    });
                    if !inside {
                        set_menu_open(document, false);
                    }
                }
                (Listener::CloseBeforeUnload, PageEvent::BeforeUnload) => {
                    set_menu_open(document, false);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Best-effort: a page without the menu is left alone.
fn set_menu_open(document: &mut Document, open: bool) {
    if let Some(menu) = document.element_by_id_mut(PROFILE_MENU_ID) {
        menu.set_attr("aria-hidden", aria_hidden(open));
    }
}

//! Page glue: what each static page does on load and on click.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::instrument;

use crate::{
    adapters::dom::{
        document::{Document, ElementHandle, PAGE_CONTAINER, SharedDocument},
        loading::{clear_loading, set_loading},
        membership_summary::render_membership_summary,
        navigator::BrowserLocation,
        topbar::{PageEvent, Topbar},
    },
    app_error::{AppError, AppResult},
    application::{
        use_cases::{
            provider_param::{PROVIDER_PARAM, apply_provider_param},
            session::SessionUseCases,
            timing::Timing,
        },
        views::{
            membership_summary::MEMBERSHIP_SUMMARY_CONTAINER,
            topbar::{ActiveLink, TOPBAR_CONTAINER},
        },
    },
    infra::{clock::delay_provider, setup::AppState},
};

use super::query::PageLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Login,
    Browse,
    Account,
    Membership,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "index.html" => Some(Page::Index),
            "login.html" => Some(Page::Login),
            "browse.html" => Some(Page::Browse),
            "account.html" => Some(Page::Account),
            "membership.html" => Some(Page::Membership),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Login => "login.html",
            Page::Browse => "browse.html",
            Page::Account => "account.html",
            Page::Membership => "membership.html",
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Page::Index | Page::Login)
    }

    /// Container ids present in the page's static markup.
    pub fn containers(&self) -> &'static [&'static str] {
        match self {
            Page::Index | Page::Login => &[PAGE_CONTAINER],
            Page::Browse => &[TOPBAR_CONTAINER, PAGE_CONTAINER],
            Page::Account | Page::Membership => &[
                TOPBAR_CONTAINER,
                PAGE_CONTAINER,
                MEMBERSHIP_SUMMARY_CONTAINER,
            ],
        }
    }

    pub fn active_link(&self) -> ActiveLink {
        match self {
            Page::Account => ActiveLink::Account,
            _ => ActiveLink::None,
        }
    }
}

/// Result of loading a page or interacting with it.
pub enum PageOutcome {
    /// The page is showing and accepts further events.
    Shown(OpenPage),
    /// The page sent the tab elsewhere.
    Navigated { to: String },
}

/// A loaded page with its live document and listeners.
pub struct OpenPage {
    pub page: Page,
    document: SharedDocument,
    topbar: Option<Topbar>,
    timing: Timing,
    navigator: Arc<BrowserLocation>,
    /// Re-enable timers started by clicks.
    pending: Vec<JoinHandle<()>>,
}

impl OpenPage {
    pub fn document(&self) -> SharedDocument {
        self.document.clone()
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn to_html(&self) -> String {
        self.document
            .lock()
            .map(|doc| doc.to_html())
            .unwrap_or_default()
    }

    /// Click the element with id `target`.
    ///
    /// A disabled element swallows the click. Buttons get the brief disabled
    /// state before listeners run. If a listener navigates, before-unload
    /// listeners fire and the page closes.
    #[instrument(skip(self), fields(page = self.page.file_name()))]
    pub fn click(mut self, target: &str) -> AppResult<PageOutcome> {
        {
            let mut doc = lock(&self.document)?;
            let Some(element) = doc.element_by_id(target) else {
                return Err(AppError::InvalidInput(format!(
                    "no element with id {target:?} on {}",
                    self.page.file_name()
                )));
            };
            if element.get_attr("disabled").is_some() {
                tracing::debug!(id = target, "Click on disabled control ignored");
                drop(doc);
                return Ok(PageOutcome::Shown(self));
            }
            let is_button = element.tag == "button";

            if is_button {
                drop(doc);
                let timer = self
                    .timing
                    .temporarily_disable(Arc::new(ElementHandle::new(&self.document, target)))?;
                self.pending.push(timer);
                doc = lock(&self.document)?;
            }

            if let Some(topbar) = &self.topbar {
                topbar.dispatch(&mut doc, &PageEvent::click(target))?;
            }
        }

        self.finish_event()
    }

    /// Click an empty part of the page.
    pub fn click_outside(self) -> AppResult<PageOutcome> {
        if let Some(topbar) = &self.topbar {
            let mut doc = lock(&self.document)?;
            topbar.dispatch(&mut doc, &PageEvent::click_outside())?;
        }
        self.finish_event()
    }

    /// Wait for outstanding re-enable timers, leaving the document at rest.
    pub async fn settle(&mut self) {
        for timer in self.pending.drain(..) {
            if let Err(e) = timer.await {
                tracing::debug!(error = %e, "Re-enable timer did not finish");
            }
        }
    }

    fn finish_event(mut self) -> AppResult<PageOutcome> {
        let Some(to) = self.navigator.take_pending() else {
            return Ok(PageOutcome::Shown(self));
        };

        if let Some(topbar) = self.topbar.as_mut() {
            let mut doc = lock(&self.document)?;
            topbar.dispatch(&mut doc, &PageEvent::BeforeUnload)?;
            topbar.detach();
        }
        Ok(PageOutcome::Navigated { to })
    }
}

fn lock(document: &SharedDocument) -> AppResult<std::sync::MutexGuard<'_, Document>> {
    document
        .lock()
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Load `url` the way the static pages do.
///
/// Order: guard, provider bridge, loading indicator, simulated latency,
/// renderers, loading cleared.
#[instrument(skip(app_state))]
pub async fn open_page(app_state: &AppState, url: &str) -> AppResult<PageOutcome> {
    let location = PageLocation::parse(url)?;
    let page = Page::from_path(&location.path)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown page {:?}", location.path)))?;

    let test_mode = location.is_test_mode();
    let timing = Timing::new(delay_provider(test_mode));
    let navigator = Arc::new(BrowserLocation::default());
    let session = SessionUseCases::new(
        app_state.store.clone(),
        navigator.clone(),
        app_state.config.login_page.clone(),
        app_state.config.entry_page.clone(),
    );

    if page.is_protected() {
        if !session.require_login() {
            let to = navigator
                .take_pending()
                .unwrap_or_else(|| session.login_page().to_string());
            return Ok(PageOutcome::Navigated { to });
        }
        apply_provider_param(&app_state.store, location.get(PROVIDER_PARAM))?;
    }

    let document = Document::with_containers(page.containers()).into_shared();
    set_loading(&mut *lock(&document)?, PAGE_CONTAINER);

    timing.simulated_delay().await;

    let topbar = {
        let mut doc = lock(&document)?;
        let topbar = Topbar::mount(&mut doc, session, page.active_link(), test_mode);
        render_membership_summary(&mut doc, &app_state.store, MEMBERSHIP_SUMMARY_CONTAINER);
        clear_loading(&mut doc, PAGE_CONTAINER);
        topbar
    };

    tracing::info!(page = page.file_name(), test_mode, "Page shown");

    Ok(PageOutcome::Shown(OpenPage {
        page,
        document,
        topbar,
        timing,
        navigator,
        pending: Vec::new(),
    }))
}

use std::sync::Arc;

use tracing::instrument;

use crate::{
    app_error::AppResult,
    application::{ports::navigator::Navigator, use_cases::state_store::StateStore},
    domain::entities::account_record::{AccountPatch, AccountRecord},
};

/// Sign-in/out and the protected-page guard.
#[derive(Clone)]
pub struct SessionUseCases {
    store: Arc<StateStore>,
    navigator: Arc<dyn Navigator>,
    login_page: String,
    entry_page: String,
}

impl SessionUseCases {
    pub fn new(
        store: Arc<StateStore>,
        navigator: Arc<dyn Navigator>,
        login_page: String,
        entry_page: String,
    ) -> Self {
        Self {
            store,
            navigator,
            login_page,
            entry_page,
        }
    }

    pub fn login_page(&self) -> &str {
        &self.login_page
    }

    pub fn entry_page(&self) -> &str {
        &self.entry_page
    }

    /// Redirect to the configured login page unless signed in.
    pub fn require_login(&self) -> bool {
        self.require_login_to(&self.login_page)
    }

    /// Redirect to `redirect_to` unless signed in. Returns whether the page may render.
    #[instrument(skip(self))]
    pub fn require_login_to(&self, redirect_to: &str) -> bool {
        if self.store.load().logged_in {
            return true;
        }
        tracing::info!(redirect_to, "Not signed in, redirecting");
        self.navigator.navigate(redirect_to);
        false
    }

    #[instrument(skip(self))]
    pub fn sign_in(&self) -> AppResult<AccountRecord> {
        self.store.set(AccountPatch::logged_in(true))
    }

    /// Clear the session flag and go to the entry page. Other fields survive.
    #[instrument(skip(self))]
    pub fn sign_out(&self) -> AppResult<()> {
        self.store.set(AccountPatch::logged_in(false))?;
        self.navigator.navigate(&self.entry_page);
        Ok(())
    }
}

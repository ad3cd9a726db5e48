use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::{
    adapters::{
        dom::navigator::BrowserLocation,
        page::session::{PageOutcome, open_page},
    },
    app_error::AppResult,
    application::use_cases::session::SessionUseCases,
    domain::entities::account_record::AccountPatch,
    infra::setup::AppState,
};

#[derive(Parser)]
#[command(name = "mockflix")]
#[command(about = "Drive the Mockflix account mock from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage file (overrides MOCKFLIX_STORAGE_PATH)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or change the persisted account record
    State {
        #[command(subcommand)]
        action: StateAction,
    },

    /// Mark the session as signed in
    SignIn,

    /// Clear the session flag
    SignOut,

    /// Load a page (e.g. "membership.html?provider=apple&test=1") and print it
    Open {
        url: String,
    },

    /// Load a page, click elements by id in order, and print the result
    Click {
        url: String,

        /// Element ids to click
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum StateAction {
    /// Print the current record as JSON
    Show,

    /// Merge a JSON patch such as '{"plan":"Premium"}'
    Set { patch: String },
}

/// What the command produced, for the caller to print.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    Redirect(String),
}

impl std::fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutput::Text(text) => f.write_str(text),
            CommandOutput::Redirect(to) => write!(f, "-> {to}"),
        }
    }
}

pub async fn run(app_state: &AppState, command: Commands) -> AppResult<CommandOutput> {
    match command {
        Commands::State { action } => match action {
            StateAction::Show => Ok(CommandOutput::Text(pretty(&app_state.store.load())?)),
            StateAction::Set { patch } => {
                let patch: AccountPatch = serde_json::from_str(&patch)?;
                let record = app_state.store.set(patch)?;
                Ok(CommandOutput::Text(pretty(&record)?))
            }
        },
        Commands::SignIn => {
            let record = session(app_state).sign_in()?;
            Ok(CommandOutput::Text(pretty(&record)?))
        }
        Commands::SignOut => {
            let navigator = Arc::new(BrowserLocation::default());
            let session = SessionUseCases::new(
                app_state.store.clone(),
                navigator.clone(),
                app_state.config.login_page.clone(),
                app_state.config.entry_page.clone(),
            );
            session.sign_out()?;
            let to = navigator
                .take_pending()
                .unwrap_or_else(|| session.entry_page().to_string());
            Ok(CommandOutput::Redirect(to))
        }
        Commands::Open { url } => match open_page(app_state, &url).await? {
            PageOutcome::Shown(page) => Ok(CommandOutput::Text(page.to_html())),
            PageOutcome::Navigated { to } => Ok(CommandOutput::Redirect(to)),
        },
        Commands::Click { url, targets } => {
            let mut outcome = open_page(app_state, &url).await?;
            for target in &targets {
                outcome = match outcome {
                    PageOutcome::Shown(page) => page.click(target)?,
                    navigated => return Ok(redirect(navigated)),
                };
            }
            Ok(match outcome {
                PageOutcome::Shown(mut page) => {
                    page.settle().await;
                    CommandOutput::Text(page.to_html())
                }
                navigated => redirect(navigated),
            })
        }
    }
}

fn session(app_state: &AppState) -> SessionUseCases {
    SessionUseCases::new(
        app_state.store.clone(),
        Arc::new(BrowserLocation::default()),
        app_state.config.login_page.clone(),
        app_state.config.entry_page.clone(),
    )
}

fn redirect(outcome: PageOutcome) -> CommandOutput {
    match outcome {
        PageOutcome::Navigated { to } => CommandOutput::Redirect(to),
        PageOutcome::Shown(page) => CommandOutput::Text(page.to_html()),
    }
}

fn pretty<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| crate::app_error::AppError::Internal(e.to_string()))
}

//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for directory operations, whatever front-end drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries collaborators** the commands need (label catalog, credential check)
//! - **Returns structured types** (`Result<CmdResult>`, `Option<DetailView>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and the pure core
//! - **I/O operations**: No stdout, stderr, or network
//! - **UI state**: Filters, page cursor and selection live with the caller
//!   (see [`crate::browse::BrowseState`])
//!
//! The caller passes the language on every call and owns the [`Session`].
//! Summaries are not generated here; [`DirectoryApi::summary_request`] only
//! builds the request so the caller can run it on its own schedule.
//!
//! ## Generic Over DataStore
//!
//! `DirectoryApi<S: DataStore>` is generic over the storage backend so the
//! layer can be tested with fixtures.

use crate::commands;
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::i18n::Labels;
use crate::model::{Language, Personality, PersonalityDraft};
use crate::resolve::DetailView;
use crate::session::{CredentialCheck, PlaceholderCredentials, Session};
use crate::store::DataStore;
use crate::summary::SummaryRequest;

pub struct DirectoryApi<S: DataStore> {
    store: S,
    labels: Labels,
    credentials: Box<dyn CredentialCheck>,
}

impl<S: DataStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            labels: Labels::builtin().clone(),
            credentials: Box::new(PlaceholderCredentials),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_credentials<C: CredentialCheck + 'static>(mut self, credentials: C) -> Self {
        self.credentials = Box::new(credentials);
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn collection(&self) -> &[Personality] {
        self.store.all()
    }

    pub fn list(&self, spec: &FilterSpec, page: usize) -> Result<CmdResult> {
        commands::list::run(&self.store, spec, page)
    }

    pub fn detail(&self, id: u32, language: Language) -> Option<DetailView<'_>> {
        commands::view::run(&self.store, id, language, &self.labels)
    }

    pub fn rate(&mut self, id: u32, vote: u8, language: Language) -> Result<CmdResult> {
        commands::rate::run(&mut self.store, id, vote, language, &self.labels)
    }

    pub fn login(&self, session: &mut Session, user: &str, password: &str) -> CmdResult {
        let language = session.language;
        if session.login(self.credentials.as_ref(), user, password) {
            CmdResult::default().with_message(CmdMessage::success(
                self.labels.t("login_success", language),
            ))
        } else {
            CmdResult::default()
                .with_message(CmdMessage::error(self.labels.t("login_error", language)))
        }
    }

    pub fn logout(&self, session: &mut Session) -> CmdResult {
        session.logout();
        CmdResult::default().with_message(CmdMessage::info(
            self.labels.t("logout_success", session.language),
        ))
    }

    pub fn create_personality(
        &mut self,
        session: &Session,
        draft: PersonalityDraft,
        current_year: i32,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, session, draft, current_year, &self.labels)
    }

    pub fn update_personality(
        &mut self,
        session: &Session,
        person: Personality,
        current_year: i32,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, session, person, current_year, &self.labels)
    }

    pub fn delete_personality(&mut self, session: &Session, id: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, session, id, &self.labels)
    }

    pub fn search(&self, session: &Session, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, session, term)
    }

    /// The summary request for `id` in `language`, or `None` for an unknown id.
    pub fn summary_request(&self, id: u32, language: Language) -> Option<SummaryRequest> {
        self.store
            .get(id)
            .map(|person| SummaryRequest::for_person(person, language))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PageInfo};

//! In-memory roster state and the transitions a presentation layer drives.
//!
//! # Design
//! `RosterViewModel` owns the ordered record list, the single open edit
//! session, and the user-visible error slot. Every transition that talks to
//! the API takes `&mut self` and awaits the call before folding the result
//! in, so completions are applied in the order transitions were issued.
//!
//! Update and delete outcomes are reconciled according to
//! [`ReconcilePolicy`]: `Strict` only mutates the list on success, `Lenient`
//! mutates it once the call resolves, whatever the result.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::client::RosterClient;
use crate::config::{ReconcilePolicy, RosterConfig};
use crate::error::{NetworkError, RosterError};
use crate::http::{ReqwestTransport, Transport};
use crate::service::RosterService;
use crate::types::{StudentDraft, StudentId, StudentRecord};

/// Pending edits for one existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: StudentId,
    pub draft: StudentDraft,
}

#[derive(Debug)]
pub struct RosterViewModel<T> {
    service: RosterService<T>,
    policy: ReconcilePolicy,
    records: Vec<StudentRecord>,
    editing: Option<EditSession>,
    last_error: Option<String>,
}

impl RosterViewModel<ReqwestTransport> {
    pub fn connect(config: &RosterConfig) -> Result<Self, NetworkError> {
        let service = RosterService::new(
            RosterClient::new(&config.base_url),
            ReqwestTransport::new()?,
        );
        Ok(Self::new(service, config.reconcile))
    }
}

impl<T: Transport> RosterViewModel<T> {
    pub fn new(service: RosterService<T>, policy: ReconcilePolicy) -> Self {
        Self {
            service,
            policy,
            records: Vec::new(),
            editing: None,
            last_error: None,
        }
    }

    pub fn service(&self) -> &RosterService<T> {
        &self.service
    }

    pub fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    /// Records in arrival order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn record(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn editing_id(&self) -> Option<&StudentId> {
        self.editing.as_ref().map(|s| &s.id)
    }

    pub fn editing_draft(&self) -> Option<&StudentDraft> {
        self.editing.as_ref().map(|s| &s.draft)
    }

    /// Mutable access to the open draft, for binding edit inputs.
    pub fn editing_draft_mut(&mut self) -> Option<&mut StudentDraft> {
        self.editing.as_mut().map(|s| &mut s.draft)
    }

    /// Initial fetch.
    pub async fn load(&mut self) -> Result<(), RosterError> {
        match self.service.list().await {
            Ok(records) => {
                self.load_completed(records);
                Ok(())
            }
            Err(e) => Err(self.report(e.into())),
        }
    }

    /// Replace the whole list. Later duplicates of an id are dropped.
    pub fn load_completed(&mut self, records: Vec<StudentRecord>) {
        let received = records.len();
        let mut seen = HashSet::new();
        self.records = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        if self.records.len() < received {
            warn!(
                dropped = received - self.records.len(),
                "fetched roster contained duplicate ids"
            );
        }

        let stale = self
            .editing_id()
            .is_some_and(|id| self.record(id).is_none());
        if stale {
            debug!("edited record no longer present, closing edit");
            self.editing = None;
        }
        info!(count = self.records.len(), "roster loaded");
    }

    /// Validate form input and, if it passes, create the record remotely and
    /// append what the server returns.
    pub async fn submit_create(
        &mut self,
        full_name: &str,
        dob: &str,
        gpa: &str,
    ) -> Result<StudentRecord, RosterError> {
        let draft = StudentDraft::from_form(full_name, dob, gpa);
        if let Err(e) = draft.validate() {
            return Err(self.report(e.into()));
        }

        let record = match self.service.create(&draft).await {
            Ok(record) => record,
            Err(e) => return Err(self.report(e.into())),
        };

        match self.records.iter().position(|r| r.id == record.id) {
            Some(index) => {
                warn!(id = %record.id, "created id already in roster, replacing");
                self.records[index] = record.clone();
            }
            None => self.records.push(record.clone()),
        }
        self.last_error = None;
        info!(id = %record.id, "student created");
        Ok(record)
    }

    /// Open an edit session seeded from the current record.
    pub fn begin_edit(&mut self, id: &StudentId) -> Result<(), RosterError> {
        let record = self
            .record(id)
            .ok_or_else(|| RosterError::UnknownStudent(id.clone()))?;
        self.editing = Some(EditSession {
            id: id.clone(),
            draft: record.to_draft(),
        });
        Ok(())
    }

    pub async fn submit_edit(&mut self) -> Result<(), RosterError> {
        let session = self.editing.clone().ok_or(RosterError::NoEditInProgress)?;
        if let Err(e) = session.draft.validate() {
            return Err(self.report(e.into()));
        }

        if let Err(e) = self.service.update(&session.id, &session.draft).await {
            match self.policy {
                ReconcilePolicy::Strict => return Err(self.report(e.into())),
                ReconcilePolicy::Lenient => {
                    warn!(id = %session.id, error = %e, "update failed, applying locally")
                }
            }
        }

        if let Some(record) = self.records.iter_mut().find(|r| r.id == session.id) {
            record.apply(&session.draft);
        }
        self.editing = None;
        self.last_error = None;
        info!(id = %session.id, "student updated");
        Ok(())
    }

    /// Abandon the open edit without touching the server.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn remove(&mut self, id: &StudentId) -> Result<(), RosterError> {
        match self.service.delete(id).await {
            Ok(()) => {}
            Err(NetworkError::NotFound) => debug!(%id, "student already gone on the server"),
            Err(e) => match self.policy {
                ReconcilePolicy::Strict => return Err(self.report(e.into())),
                ReconcilePolicy::Lenient => {
                    warn!(%id, error = %e, "delete failed, removing locally")
                }
            },
        }

        self.records.retain(|r| &r.id != id);
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        info!(%id, "student removed");
        Ok(())
    }

    fn report(&mut self, err: RosterError) -> RosterError {
        self.last_error = Some(err.to_string());
        err
    }
}

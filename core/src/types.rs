//! Domain DTOs for the student roster API.
//!
//! # Design
//! These types mirror the server's JSON schema (`id`, `fullName`, `dob`,
//! `gpa`) but are defined independently of any server crate. Field values
//! are held as the text the user typed; the validator decides whether that
//! text is acceptable.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier. The API may hand out numeric or string ids;
/// both are kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{n}"),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for StudentId {
    fn from(n: u64) -> Self {
        StudentId::Number(n)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        StudentId::Text(s.to_string())
    }
}

/// A student record that has not been persisted yet. Also the request body
/// for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub full_name: String,
    pub dob: String,
    #[serde(deserialize_with = "gpa_text")]
    pub gpa: String,
}

impl StudentDraft {
    pub fn new(full_name: &str, dob: &str, gpa: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            dob: dob.to_string(),
            gpa: gpa.to_string(),
        }
    }

    /// Build a draft from raw form input, trimming surrounding whitespace.
    pub fn from_form(full_name: &str, dob: &str, gpa: &str) -> Self {
        Self::new(full_name.trim(), dob.trim(), gpa.trim())
    }
}

/// A persisted student record returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub full_name: String,
    pub dob: String,
    #[serde(deserialize_with = "gpa_text")]
    pub gpa: String,
}

impl StudentRecord {
    /// The record's editable fields as a draft.
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            full_name: self.full_name.clone(),
            dob: self.dob.clone(),
            gpa: self.gpa.clone(),
        }
    }

    /// Overwrite every field except `id`.
    pub fn apply(&mut self, draft: &StudentDraft) {
        self.full_name = draft.full_name.clone();
        self.dob = draft.dob.clone();
        self.gpa = draft.gpa.clone();
    }
}

/// Accept `gpa` as either a JSON string or a JSON number.
fn gpa_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Gpa {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Gpa::deserialize(deserializer)? {
        Gpa::Text(s) => s,
        Gpa::Number(n) => n.to_string(),
    })
}

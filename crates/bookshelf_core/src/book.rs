//! Book records and their identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a book record.
///
/// Ids are UUIDs that are:
/// - Unique within a collection
/// - Assigned once, at creation
/// - Never reused, even after the record is removed
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generates a new random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an id from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", self.0)
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for BookId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<BookId> for Uuid {
    fn from(id: BookId) -> Self {
        id.0
    }
}

/// A single record in the collection.
///
/// Identity is carried by [`Book::id`] alone; two records with the same
/// title and author are still distinct entries. The serialized form uses
/// camelCase field names so blobs written by earlier versions of the app
/// keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier.
    pub id: BookId,
    /// Title, as entered. Callers pass trimmed, non-empty text.
    pub title: String,
    /// Author, as entered. Callers pass trimmed, non-empty text.
    pub author: String,
    /// ISBN, when known. Never `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// When the record was added to the collection.
    pub date_added: DateTime<Utc>,
}

impl Book {
    /// Creates a record with a fresh id and the current time.
    ///
    /// An empty ISBN means the same thing as an absent one, "unknown",
    /// and is normalized to `None` here.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: Option<&str>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.filter(|s| !s.is_empty()).map(str::to_string),
            date_added: Utc::now(),
        }
    }
}

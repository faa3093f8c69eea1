//! Purpose: Define the persisted dataset model for the library store.
//! Exports: `Book`, `Member`, `Action`, `Transaction`, `Dataset`.
//! Role: Single source of truth for the on-disk JSON shape.
//! Invariants: Field names are the file-format contract; changes are additive-only.
//! Invariants: Transaction entries are append-only once written.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub member_id: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Issued,
    Returned,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub isbn: String,
    pub member_id: String,
    pub action: Action,
    /// RFC3339 UTC. Absent in files written before timestamps existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// The full persisted state. The unit of load/save; the store never
/// reads or writes a partial dataset.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub(crate) fn now_rfc3339() -> Result<String, Error> {
    use time::format_description::well_known::Rfc3339;
    time::OffsetDateTime::now_utc().format(&Rfc3339).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("timestamp format failed")
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{Action, Book, Dataset, Member, Transaction, now_rfc3339};

    #[test]
    fn new_book_starts_available() {
        let book = Book::new("Dune", "Herbert", "111");
        assert!(book.available);
    }

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Action::Issued).expect("serialize"),
            "\"issued\""
        );
        assert_eq!(
            serde_json::to_string(&Action::Returned).expect("serialize"),
            "\"returned\""
        );
    }

    #[test]
    fn transaction_without_time_still_loads() {
        let json = r#"{"isbn":"111","member_id":"M1","action":"issued"}"#;
        let tx: Transaction = serde_json::from_str(json).expect("deserialize");
        assert_eq!(tx.action, Action::Issued);
        assert_eq!(tx.time, None);
    }

    #[test]
    fn empty_dataset_has_three_empty_sequences() {
        let data = Dataset::empty();
        assert!(data.books.is_empty());
        assert!(data.members.is_empty());
        assert!(data.transactions.is_empty());
    }

    #[test]
    fn dataset_round_trips_through_json() {
        let data = Dataset {
            books: vec![Book::new("Dune", "Herbert", "111")],
            members: vec![Member {
                name: "Alice".to_string(),
                member_id: "M1".to_string(),
            }],
            transactions: vec![Transaction {
                isbn: "111".to_string(),
                member_id: "M1".to_string(),
                action: Action::Issued,
                time: Some("2026-01-01T00:00:00Z".to_string()),
            }],
        };
        let json = serde_json::to_string(&data).expect("serialize");
        let back: Dataset = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, data);
    }

    #[test]
    fn now_rfc3339_parses_back() {
        let stamp = now_rfc3339().expect("timestamp");
        time::OffsetDateTime::parse(&stamp, &time::format_description::well_known::Rfc3339)
            .expect("parse");
    }
}

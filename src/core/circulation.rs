//! Purpose: Issue/return state machine over a loaded dataset.
//! Exports: `issue_book` and `return_book`.
//! Role: Pure circulation logic; persistence is the caller's concern.
//! Invariants: First matching entry in sequence order wins when isbns collide.
//! Invariants: Every successful transition appends exactly one transaction.

use crate::core::error::Error;
use crate::core::model::{Action, Dataset, Transaction, now_rfc3339};

/// Issue the first available copy matching `isbn` to `member_id`.
///
/// Returns `Ok(false)` when no available copy exists, whether the isbn
/// is absent or every copy is already issued. Logical failure is a
/// normal outcome, not an error; only timestamping can fail.
pub fn issue_book(data: &mut Dataset, isbn: &str, member_id: &str) -> Result<bool, Error> {
    transition(data, isbn, member_id, Action::Issued)
}

/// Return the first issued copy matching `isbn`.
///
/// The returning member is not required to be the member the copy was
/// issued to; the member id is recorded as given.
pub fn return_book(data: &mut Dataset, isbn: &str, member_id: &str) -> Result<bool, Error> {
    transition(data, isbn, member_id, Action::Returned)
}

fn transition(
    data: &mut Dataset,
    isbn: &str,
    member_id: &str,
    action: Action,
) -> Result<bool, Error> {
    let wanted_available = matches!(action, Action::Issued);
    let Some(book) = data
        .books
        .iter_mut()
        .find(|book| book.isbn == isbn && book.available == wanted_available)
    else {
        return Ok(false);
    };

    book.available = !wanted_available;
    data.transactions.push(Transaction {
        isbn: isbn.to_string(),
        member_id: member_id.to_string(),
        action,
        time: Some(now_rfc3339()?),
    });
    Ok(true)
}

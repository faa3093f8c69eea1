// Structural additions to a loaded dataset; no lifecycle logic.
use crate::core::error::{Error, ErrorKind};
use crate::core::model::{Book, Dataset, Member};

/// Append a new book, available on creation. Input is assumed
/// non-empty; the API boundary validates before calling in.
pub fn add_book(
    data: &mut Dataset,
    title: &str,
    author: &str,
    isbn: &str,
) -> Result<(), Error> {
    if data.books.iter().any(|book| book.isbn == isbn) {
        return Err(Error::new(ErrorKind::AlreadyExists)
            .with_message(format!("a book with isbn '{isbn}' is already cataloged")));
    }
    data.books.push(Book::new(title, author, isbn));
    Ok(())
}

/// Append a new member. Same boundary-validation assumption as
/// [`add_book`].
pub fn add_member(data: &mut Dataset, name: &str, member_id: &str) -> Result<(), Error> {
    if data.members.iter().any(|member| member.member_id == member_id) {
        return Err(Error::new(ErrorKind::AlreadyExists)
            .with_message(format!("a member with id '{member_id}' is already registered")));
    }
    data.members.push(Member {
        name: name.to_string(),
        member_id: member_id.to_string(),
    });
    Ok(())
}

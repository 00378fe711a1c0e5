//! The address book collection and its scoped persistence.
//!
//! - [`AddressBook`]: name-keyed records with search and birthday queries
//! - [`Pages`]: lazy paginated listing
//! - [`UpcomingBirthdays`]: lazy, restartable birthday filter
//! - [`OpenBook`]: a book loaded from a store and saved when the scope ends

mod address_book;
mod pages;
mod session;
mod upcoming;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW, DEFAULT_PAGE_SIZE};
pub use pages::Pages;
pub use session::OpenBook;
pub use upcoming::{UpcomingBirthdays, UpcomingIter};

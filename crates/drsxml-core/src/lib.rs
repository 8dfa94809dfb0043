//! Assembly of Crossref 5.3.0 `doi_batch` documents.
//!
//! The entry point is [`build_doi_batch`], which takes a [`Deposit`] (book
//! reviews, a standalone proceedings volume, or a proceedings volume in a
//! series) and returns the finished in-memory [`DoiBatch`].

pub mod book_review;
pub mod clock;
pub mod contributors;
pub mod deposit;
pub mod doi;
pub mod head;
pub mod proceedings;
pub mod root;

pub use book_review::{populate_book_review_body, split_publication_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contributors::add_contributors;
pub use deposit::{Deposit, build_doi_batch, populate_body};
pub use doi::add_doi_data;
pub use head::{batch_id, populate_head, timestamp};
pub use proceedings::{Proceedings, VolumeKind, populate_proceedings_body};
pub use root::{DoiBatch, SCHEMA_LOCATION, SCHEMA_VERSION};

pub mod collection;
pub mod config;
pub mod element;
pub mod error;
pub mod record;

pub use collection::{CollectionMetadata, ConferenceDates, zero_pad};
pub use config::DepositorConfig;
pub use element::Element;
pub use error::{DepositError, Result};
pub use record::{Author, Record, author_key};

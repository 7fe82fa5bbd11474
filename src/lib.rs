#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # deen-api
//!
//! deen-api is a thin client library around the Imaniro Deen hadith lookup API.
//!
//! This library can:
//! - search hadiths by book, number, narrator, category, authenticity and language,
//! - check the availability of the service itself.
//!
//! Every request carries the account's API key in the `X-API-Key` header, and
//! every non-success HTTP status is mapped to a typed [`Error`].
//!
//! ## Example: Fetching a hadith about intentions.
//!
//! ```no_run
//! use deen_api::{Client, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), deen_api::Error> {
//!     let client = Client::new("my-api-key");
//!
//!     let query = SearchQuery::new()
//!         .book("Sahih al-Bukhari")
//!         .category("intentions")
//!         .max_limit(3);
//!
//!     for hadith in client.search(query).await? {
//!         println!("{}: {}", hadith.narrator(), hadith.text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Error`]: crate::error::Error

/// Client module contains [`Client`] for talking to the service.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Query module contains the [`SearchQuery`] request builder.
pub mod query;

pub(crate) mod models;

pub(crate) mod result;

pub use client::Client;
pub use error::Error;
pub use models::*;
pub use query::SearchQuery;

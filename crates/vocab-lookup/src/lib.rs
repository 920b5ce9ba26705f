//! HTTP definition lookup for vocab, against the free dictionary API.
//!
//! [`DictApiClient`] implements the `DefinitionProvider` seam from
//! `vocab-dict` with blocking requests to <https://dictionaryapi.dev>.

/// The blocking API client and its response model.
pub mod client;

/// Re-export the client.
pub use client::DictApiClient;

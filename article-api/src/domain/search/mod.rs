//! Article search over a single `article` table.
//!
//! This module provides:
//! - **Query extraction** from raw query-string pairs into a [`FilterRequest`]
//! - **Compilation** of a request into a backend-agnostic [`Predicate`]
//! - **Rendering** of that predicate as a PostgREST filter or parameterized SQL
//!
//! # Architecture
//!
//! The search system is built around one trait for testability:
//!
//! - [`ArticleRepository`] - Backend access (PostgreSQL, PostgREST, mocks)
//!
//! # Query Syntax
//!
//! - `orGroup=kafka|latency&orGroup=grpc` → (kafka AND latency) OR grpc, on `text`
//! - `exclude=deprecated` → NOT text ILIKE %deprecated%
//! - `title=scal`, `url=blog` → substring filters
//! - `podcast=changelog`, `company=amazon` → url allow-lists from the registries
//!
//! See [`compile_filter`] for the exact shape of the compiled predicate.

mod compiler;
mod extractor;
mod predicate;
mod registry;
mod render;
mod service;
mod traits;
mod types;

pub mod repository;

// Re-export main types
pub use compiler::{compile_fielded, compile_filter, compile_simple, AllowList};
pub use extractor::{extract_filter_request, extract_simple_query};
pub use predicate::{Field, FieldValues, Predicate};
pub use registry::{DomainRegistry, EmptySelection, RegistryEntry, Universe, COMPANIES, PODCASTS};
pub use render::{render_rest, render_sql, RestFilter, SqlFragment};
pub use service::{SearchConfig, SearchService};
pub use traits::{ArticleRepository, BackendKind, SearchError};
pub use types::{Article, ArticleUrl, FilterRequest, StoredArticle};

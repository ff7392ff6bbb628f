//! Minimal async client for a PostgREST endpoint (as exposed by Supabase).
//!
//! Only the read side is covered: `select` with a filter tree and a limit,
//! plus an exact row count.

mod auth;
mod client;
mod filter;
mod postgrest_url;

pub use auth::*;
pub use client::*;
pub use filter::*;
pub use postgrest_url::*;

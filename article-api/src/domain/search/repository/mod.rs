//! Article repository implementations.

#[cfg(test)]
mod mock;
mod postgres;
mod rest;

#[cfg(test)]
pub use mock::MockArticleRepository;
pub use postgres::PgArticleRepository;
pub use rest::RestArticleRepository;

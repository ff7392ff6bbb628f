pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod podcasts;
pub(crate) mod response;
pub(crate) mod search;

pub(crate) use error::ApiError;
pub(crate) use response::Success;

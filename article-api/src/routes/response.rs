//! JSON envelope shared by every endpoint.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Key under which rows are returned. The health probe and the simple search
/// use `data`; everything else uses `results`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rows<T> {
    Results(Vec<T>),
    Data(Vec<T>),
}

/// `{ "ok": true, "results": [...] }` or `{ "ok": true, "data": [...] }`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    ok: bool,
    #[serde(flatten)]
    rows: Rows<T>,
}

impl<T> Success<T> {
    pub fn results(rows: Vec<T>) -> Self {
        Self {
            ok: true,
            rows: Rows::Results(rows),
        }
    }

    pub fn data(rows: Vec<T>) -> Self {
        Self {
            ok: true,
            rows: Rows::Data(rows),
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

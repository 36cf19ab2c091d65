//! Body and query extractors that reject with the JSON error envelope.
//!
//! Axum's own `Json` and `Query` reject with a plain-text body. These wrap
//! them so decoding failures come back as the usual `AppError` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Responses keep using `axum::Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

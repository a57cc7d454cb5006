//! JSON body extractor
//!
//! Same as `axum::Json`, but a body that cannot be read or deserialized
//! becomes a 400 `{"error": ...}` instead of axum's plain-text rejection.

use axum::extract::FromRequest;

use crate::utils::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body whose rejection is an [`AppError`], so a malformed body fails
/// the same way as any other request.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters with the same uniform rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

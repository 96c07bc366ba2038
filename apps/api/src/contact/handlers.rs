use axum::{extract::rejection::JsonRejection, Json};

use crate::contact::validation::ContactPayload;
use crate::contact::{record_submission, ContactReceipt};
use crate::errors::AppError;

/// POST /api/contact
///
/// 400 with per-field messages on invalid input; otherwise logs the submission and returns 200.
pub async fn handle_contact(
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactReceipt>, AppError> {
    let Json(payload) = payload?;
    let submission = payload.validate()?;
    Ok(Json(record_submission(&submission)))
}

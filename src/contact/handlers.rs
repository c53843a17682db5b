use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info, instrument, warn};

use crate::contact::dto::{ContactForm, ContactResponse};
use crate::contact::{repo, services};
use crate::state::AppState;

/// Every outcome carries the `{success, message}` body the contact page
/// expects, failures included.
#[instrument(skip(state, form))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Err(reason) = services::validate(&form) {
        warn!(%reason, "contact form rejected");
        return failure(StatusCode::BAD_REQUEST, reason);
    }

    let id = match repo::insert_request(&state.db, &form).await {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, "store contact request failed");
            return failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    info!(request_id = %id, beer_type = %form.beer_type, "contact request stored");
    (
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Form submitted successfully".into(),
        }),
    )
}

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<ContactResponse>) {
    (
        status,
        Json(ContactResponse {
            success: false,
            message: message.into(),
        }),
    )
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn response_serializes_success_and_message() {
        let response = ContactResponse {
            success: true,
            message: "Form submitted successfully".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("Form submitted successfully"));
    }

    #[test]
    fn failure_keeps_the_response_shape() {
        let (status, Json(body)) = failure(StatusCode::BAD_REQUEST, "Missing required fields");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.message, "Missing required fields");

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"success\":false"));
    }
}

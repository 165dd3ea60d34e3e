//! HTTP handlers for the relay server.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::relay::{RelayResponse, ALLOWED_METHOD};

/// Contact-form endpoint.
pub async fn submit_contact(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    state.relay.handle(method.as_str(), &body).await.into_response()
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self {
            RelayResponse::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            RelayResponse::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, ALLOWED_METHOD)],
                "Method Not Allowed",
            )
                .into_response(),
            RelayResponse::Failed(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

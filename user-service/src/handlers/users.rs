//! User lookup by path identifier.
//!
//! [`handle`] is the whole contract: it always produces a [`LookupResponse`]
//! and never propagates an error. Store failures are logged here and
//! reported to the caller only as a generic 500.

use crate::models::User;
use crate::services::{record_lookup, LookupOutcome, UserStore};
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

/// Path parameter carrying the user id.
pub const ID_PARAM: &str = "id";

pub const INVALID_REQUEST_BODY: &str = "Invalid Request";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Inbound lookup: the path parameters of the matched route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    pub path_parameters: HashMap<String, String>,
}

impl LookupRequest {
    pub fn new(path_parameters: HashMap<String, String>) -> Self {
        Self { path_parameters }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        let mut path_parameters = HashMap::new();
        path_parameters.insert(ID_PARAM.to_string(), id.into());
        Self { path_parameters }
    }

    pub fn id(&self) -> Option<&str> {
        self.path_parameters.get(ID_PARAM).map(String::as_str)
    }
}

/// Status plus plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub status: StatusCode,
    pub body: String,
}

impl LookupResponse {
    fn invalid_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: INVALID_REQUEST_BODY.to_string(),
        }
    }

    fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: INTERNAL_ERROR_BODY.to_string(),
        }
    }

    // Wording is relied upon by existing clients; keep "are".
    fn not_found(id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: format!("{} are not found", id),
        }
    }

    fn found(user: &User) -> Self {
        Self {
            status: StatusCode::OK,
            body: format!("{}: {}", user.id, user.name),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body,
        )
            .into_response()
    }
}

/// Resolve `request` against `table` in `store`.
///
/// One store call at most; none when the id parameter is absent.
pub async fn handle(store: &dyn UserStore, table: &str, request: &LookupRequest) -> LookupResponse {
    let Some(id) = request.id() else {
        tracing::error!("invalid path parameter");
        record_lookup(LookupOutcome::InvalidRequest);
        return LookupResponse::invalid_request();
    };

    let user = match store.find_by_id(table, id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "failed to get user");
            record_lookup(LookupOutcome::StoreError);
            return LookupResponse::internal_error();
        }
    };

    match user.filter(|user| !user.is_empty()) {
        Some(user) => {
            tracing::debug!(id = %id, "user found");
            record_lookup(LookupOutcome::Found);
            LookupResponse::found(&user)
        }
        None => {
            tracing::warn!(id = %id, "user not found");
            record_lookup(LookupOutcome::NotFound);
            LookupResponse::not_found(id)
        }
    }
}

/// `GET /users/:id` (and bare `GET /users`, which has no id).
///
/// An id that cannot be decoded (e.g. invalid UTF-8 after percent-decoding)
/// is rejected as 400 before the store is consulted.
pub async fn get_user(
    State(state): State<AppState>,
    params: Result<Path<HashMap<String, String>>, PathRejection>,
) -> LookupResponse {
    let path_parameters = match params {
        Ok(Path(params)) => params,
        Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
        Err(rejection) => {
            tracing::error!(reason = %rejection.body_text(), "undecodable path parameter");
            record_lookup(LookupOutcome::InvalidRequest);
            return LookupResponse::invalid_request();
        }
    };

    let request = LookupRequest::new(path_parameters);
    handle(state.store.as_ref(), &state.users_table_name, &request).await
}

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

/// Record identifier taken from the `{id}` path segment.
///
/// Only checks the shape (a ULID); existence is the handler's business so
/// the lookup happens inside the request's transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Ulid::from_string(raw)
            .map(|ulid| RecordId(ulid.to_string()))
            .map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidId,
                    format!("Invalid id: {raw}"),
                )
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => RecordId::parse(raw).map_err(AppError::from),
            None => Err(AppError::internal("route is missing its {id} segment")),
        };
        ready(result)
    }
}

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct RawPage {
    page: Option<i64>,
}

/// `?page=N` query parameter (default 0) as a validated `Page`.
///
/// Malformed or negative values become `INVALID_PAGE` problem responses
/// instead of actix's plain-text query errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub Page);

impl FromRequest for PageQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<RawPage>::from_query(req.query_string())
            .map_err(|_| {
                AppError::invalid(ErrorCode::InvalidPage, "page must be a whole number")
            })
            .and_then(|q| Page::new(q.page.unwrap_or(0)).map_err(AppError::from))
            .map(PageQuery);
        ready(result)
    }
}

use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::enums::common::ErrorResponse;

pub(crate) fn default_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    error!("Error in request: {} \n Error: {}", req.full_url(), err);
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::new("Invalid request body")),
    )
    .into()
}

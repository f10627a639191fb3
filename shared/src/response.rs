use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::error::UserError;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// JSON response with the CORS header every route sends
pub fn api_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

pub fn empty_response(status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Empty)
        .map_err(Box::new)?)
}

/// `{"message": ...}` body with a status picked from the error kind
pub fn error_response(err: &UserError) -> Result<Response<Body>, Error> {
    message_response(status_for(err), &err.to_string())
}

pub fn message_response(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    api_response(status, &ErrorBody { message })
}

pub fn status_for(err: &UserError) -> StatusCode {
    match err {
        UserError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        UserError::AlreadyExists | UserError::DoesNotExist => StatusCode::CONFLICT,
        UserError::Serialization
        | UserError::Deserialization
        | UserError::StorageRead
        | UserError::StorageWrite
        | UserError::StorageDelete => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

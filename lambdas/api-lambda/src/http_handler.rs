use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use users_shared::response::{api_response, empty_response, error_response, message_response};
use users_shared::{users, AppState};
use std::sync::Arc;

/// Main Lambda handler - routes user requests by HTTP method
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let body = event.body();
    let email = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("email"))
        .unwrap_or("");
    let store = state.store.as_ref();

    tracing::info!("Users Lambda invoked - Method: {} Path: {}", method, event.uri().path());

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        return Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET,POST,PUT,DELETE,OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .map_err(Box::new)?);
    }

    match *method {
        // GET ?email= - one user, GET without email - all users
        Method::GET if !email.is_empty() => match users::get_user(store, email).await {
            Ok(user) => api_response(StatusCode::OK, &user),
            Err(e) => error_response(&e),
        },
        Method::GET => match users::list_users(store).await {
            Ok(all) => api_response(StatusCode::OK, &all),
            Err(e) => error_response(&e),
        },
        Method::POST => match users::create_user(store, body).await {
            Ok(user) => api_response(StatusCode::CREATED, &user),
            Err(e) => error_response(&e),
        },
        Method::PUT => match users::update_user(store, body).await {
            Ok(user) => api_response(StatusCode::OK, &user),
            Err(e) => error_response(&e),
        },
        Method::DELETE => match users::delete_user(store, email).await {
            Ok(()) => empty_response(StatusCode::NO_CONTENT),
            Err(e) => error_response(&e),
        },
        _ => {
            tracing::warn!("⚠️ Unhandled method: {}", method);
            message_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
        }
    }
}

use lambda_http::{run, service_fn, tracing, Error, Request};
use aws_sdk_dynamodb::Client as DynamoClient;
use users_shared::config::{Backend, Config};
use users_shared::store::{DynamoStore, MemoryStore};
use users_shared::AppState;
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env()?;

    // Initialize the table client once at startup
    let state = match config.backend {
        Backend::DynamoDb => {
            let aws_config = aws_config::load_from_env().await;
            tracing::info!("Using DynamoDB table {}", config.table_name);
            AppState::new(DynamoStore::new(DynamoClient::new(&aws_config), config.table_name))
        }
        Backend::Memory => {
            tracing::warn!("USER_STORE=memory, records live only as long as this instance");
            AppState::new(MemoryStore::new())
        }
    };

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}

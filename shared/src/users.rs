use crate::error::{InputError, UserError};
use crate::store::RecordStore;
use crate::types::{User, UserRequest};
use crate::validators::is_email;

/// Create a user. Fails if a user with the same email is already stored.
pub async fn create_user(store: &dyn RecordStore, body: &[u8]) -> Result<User, UserError> {
    let user = parse_user(body)?;

    if !is_email(&user.email) {
        tracing::warn!("Rejected create with invalid email: {:?}", user.email);
        return Err(InputError::InvalidEmail.into());
    }

    if exists(store, &user.email).await? {
        return Err(UserError::AlreadyExists);
    }

    save(store, &user).await?;
    tracing::info!("Created user {}", user.email);
    Ok(user)
}

/// Get one user by email
pub async fn get_user(store: &dyn RecordStore, email: &str) -> Result<User, UserError> {
    let item = store.get(email).await.map_err(|e| {
        tracing::error!("Failed to get user {}: {}", email, e);
        UserError::StorageRead
    })?;

    match item {
        Some(item) => User::from_item(&item),
        None => Err(UserError::DoesNotExist),
    }
}

/// List every user in the table
pub async fn list_users(store: &dyn RecordStore) -> Result<Vec<User>, UserError> {
    let items = store.scan().await.map_err(|e| {
        tracing::error!("Failed to scan users: {}", e);
        UserError::StorageRead
    })?;

    items.iter().map(User::from_item).collect()
}

/// Replace a stored user. The email in the body selects the record and must already exist.
pub async fn update_user(store: &dyn RecordStore, body: &[u8]) -> Result<User, UserError> {
    let user = parse_user(body)?;

    if !exists(store, &user.email).await? {
        return Err(UserError::DoesNotExist);
    }

    save(store, &user).await?;
    tracing::info!("Updated user {}", user.email);
    Ok(user)
}

/// Delete a user. Deleting an unknown email succeeds.
pub async fn delete_user(store: &dyn RecordStore, email: &str) -> Result<(), UserError> {
    if email.is_empty() {
        return Err(InputError::MissingEmail.into());
    }

    store.delete(email).await.map_err(|e| {
        tracing::error!("Failed to delete user {}: {}", email, e);
        UserError::StorageDelete
    })?;

    tracing::info!("Deleted user {}", email);
    Ok(())
}

fn parse_user(body: &[u8]) -> Result<User, UserError> {
    let req: UserRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected user payload: {}", e);
        InputError::MalformedPayload
    })?;
    Ok(req.into())
}

async fn exists(store: &dyn RecordStore, email: &str) -> Result<bool, UserError> {
    let item = store.get(email).await.map_err(|e| {
        tracing::error!("Failed to look up user {}: {}", email, e);
        UserError::StorageRead
    })?;
    Ok(item.is_some())
}

async fn save(store: &dyn RecordStore, user: &User) -> Result<(), UserError> {
    let item = user.to_item()?;
    store.put(item).await.map_err(|e| {
        tracing::error!("Failed to put user {}: {}", user.email, e);
        UserError::StorageWrite
    })
}

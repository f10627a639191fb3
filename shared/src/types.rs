use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::UserError;

/// A table item in DynamoDB attribute-value form
pub type Item = HashMap<String, AttributeValue>;

/// Partition key of the users table
pub const KEY_ATTRIBUTE: &str = "email";
const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";

// ========== USER ==========
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request body for create and update.
/// `email` is required; a missing name stays `None`, an empty one stays `""`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UserRequest> for User {
    fn from(req: UserRequest) -> Self {
        User {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl User {
    /// Convert to a table item. Absent names are not written.
    pub fn to_item(&self) -> Result<Item, UserError> {
        // DynamoDB rejects empty key values
        if self.email.is_empty() {
            tracing::error!("Refusing to marshal user with empty email key");
            return Err(UserError::Serialization);
        }

        let mut item = Item::new();
        item.insert(KEY_ATTRIBUTE.to_string(), AttributeValue::S(self.email.clone()));
        if let Some(first_name) = &self.first_name {
            item.insert(FIRST_NAME.to_string(), AttributeValue::S(first_name.clone()));
        }
        if let Some(last_name) = &self.last_name {
            item.insert(LAST_NAME.to_string(), AttributeValue::S(last_name.clone()));
        }
        Ok(item)
    }

    /// Convert a table item back into a user
    pub fn from_item(item: &Item) -> Result<Self, UserError> {
        let email = match item.get(KEY_ATTRIBUTE) {
            Some(AttributeValue::S(email)) => email.clone(),
            other => {
                tracing::error!("Item has no string email attribute: {:?}", other);
                return Err(UserError::Deserialization);
            }
        };

        Ok(User {
            first_name: optional_string(item, FIRST_NAME)?,
            last_name: optional_string(item, LAST_NAME)?,
            email,
        })
    }
}

fn optional_string(item: &Item, name: &str) -> Result<Option<String>, UserError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        Some(other) => {
            tracing::error!("Attribute {} is not a string: {:?}", name, other);
            Err(UserError::Deserialization)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_distinguishes_absent_from_empty() {
        let req: UserRequest =
            serde_json::from_str(r#"{"email":"a@b.com","first_name":""}"#).unwrap();
        assert_eq!(req.first_name.as_deref(), Some(""));
        assert_eq!(req.last_name, None);
    }

    #[test]
    fn test_request_rejects_bad_shapes() {
        // Missing email
        assert!(serde_json::from_str::<UserRequest>(r#"{"first_name":"A"}"#).is_err());
        // Wrong type
        assert!(serde_json::from_str::<UserRequest>(r#"{"email":42}"#).is_err());
        // Unknown field
        assert!(serde_json::from_str::<UserRequest>(r#"{"email":"a@b.com","age":3}"#).is_err());
        // Not JSON at all
        assert!(serde_json::from_str::<UserRequest>("email=a@b.com").is_err());
    }

    #[test]
    fn test_item_omits_absent_names() {
        let user = User {
            email: "a@b.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        let item = user.to_item().unwrap();
        assert_eq!(item.len(), 2);
        assert_eq!(item.get("first_name"), Some(&AttributeValue::S("Ada".to_string())));
        assert!(!item.contains_key("last_name"));
        assert_eq!(User::from_item(&item).unwrap(), user);
    }

    #[test]
    fn test_empty_key_cannot_be_marshalled() {
        let user = User {
            email: String::new(),
            first_name: None,
            last_name: None,
        };
        assert_eq!(user.to_item(), Err(UserError::Serialization));
    }

    #[test]
    fn test_from_item_rejects_wrong_types() {
        let mut item = Item::new();
        item.insert("first_name".to_string(), AttributeValue::S("Ada".to_string()));
        assert_eq!(User::from_item(&item), Err(UserError::Deserialization));

        item.insert("email".to_string(), AttributeValue::S("a@b.com".to_string()));
        item.insert("last_name".to_string(), AttributeValue::N("7".to_string()));
        assert_eq!(User::from_item(&item), Err(UserError::Deserialization));
    }

    #[test]
    fn test_user_json_skips_absent_names() {
        let user = User {
            email: "a@b.com".to_string(),
            first_name: None,
            last_name: Some("Lovelace".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"email":"a@b.com","last_name":"Lovelace"}"#
        );
    }
}

//! Models/Entities của ứng dụng
//!
//! Each entity kind has three shapes: the stored entity, its `*Fields`
//! (everything a caller may set) and a `*Draft` as it arrives over the wire,
//! with every field optional until validated.

use crud_utils::{DescriptionPolicy, ValidationResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::store::Entity;

/// Status assigned when a user payload carries no `userStatus`
pub const DEFAULT_USER_STATUS: i64 = 1;

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as given; this service does no credential handling
    pub password: String,
    pub phone: String,
    pub user_status: i64,
}

/// Mutable user fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i64,
}

impl Entity for User {
    type Fields = UserFields;
    const KIND: &'static str = "User";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, fields: UserFields) -> Self {
        Self {
            id,
            username: fields.username,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            password: fields.password,
            phone: fields.phone,
            user_status: fields.user_status,
        }
    }

    fn apply(&mut self, fields: UserFields) {
        *self = Self::from_fields(self.id, fields);
    }
}

/// User request body before validation
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub user_status: Option<i64>,
}

impl UserDraft {
    /// Check every required field is present.
    ///
    /// `userStatus` falls back to [`DEFAULT_USER_STATUS`] only when absent;
    /// an explicit `0` is kept.
    pub fn validate(self) -> Result<UserFields> {
        let mut check = ValidationResult::valid();
        check
            .require("username", self.username.as_deref())
            .require("firstName", self.first_name.as_deref())
            .require("lastName", self.last_name.as_deref())
            .require("email", self.email.as_deref())
            .require("password", self.password.as_deref())
            .require("phone", self.phone.as_deref());
        check.into_result().map_err(CoreError::Validation)?;

        Ok(UserFields {
            username: self.username.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            user_status: self.user_status.unwrap_or(DEFAULT_USER_STATUS),
        })
    }
}

/// Item model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(rename = "discription", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Mutable item fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
}

impl Entity for Item {
    type Fields = ItemFields;
    const KIND: &'static str = "Item";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
    }
}

/// Item request body before validation
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ItemDraft {
    pub name: Option<String>,
    #[serde(rename = "discription")]
    pub description: Option<String>,
}

impl ItemDraft {
    /// Check required fields; whether `discription` is one depends on `policy`
    pub fn validate(self, policy: DescriptionPolicy) -> Result<ItemFields> {
        let mut check = ValidationResult::valid();
        check.require("name", self.name.as_deref());
        if policy.is_required() {
            check.require("discription", self.description.as_deref());
        }
        check.into_result().map_err(CoreError::Validation)?;

        Ok(ItemFields {
            name: self.name.unwrap_or_default(),
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_user_draft() -> UserDraft {
        UserDraft {
            username: Some("jdoe".into()),
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("john@example.com".into()),
            password: Some("secret".into()),
            phone: Some("555".into()),
            user_status: None,
        }
    }

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let user = User::from_fields(7, full_user_draft().validate().unwrap());
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "username": "jdoe",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "password": "secret",
                "phone": "555",
                "userStatus": 1
            })
        );
    }

    #[test]
    fn test_user_status_zero_is_kept() {
        let draft = UserDraft {
            user_status: Some(0),
            ..full_user_draft()
        };
        assert_eq!(draft.validate().unwrap().user_status, 0);
    }

    #[test]
    fn test_user_missing_fields_reported_together() {
        let draft = UserDraft {
            first_name: None,
            phone: Some(String::new()),
            ..full_user_draft()
        };
        assert_eq!(
            draft.validate(),
            Err(CoreError::Validation(vec!["firstName", "phone"]))
        );
    }

    #[test]
    fn test_user_apply_keeps_id() {
        let mut user = User::from_fields(10, full_user_draft().validate().unwrap());
        let fields = UserDraft {
            username: Some("renamed".into()),
            ..full_user_draft()
        }
        .validate()
        .unwrap();
        user.apply(fields);
        assert_eq!(user.id, 10);
        assert_eq!(user.username, "renamed");
    }

    #[test]
    fn test_item_description_policy() {
        let draft = ItemDraft {
            name: Some("Widget".into()),
            description: None,
        };
        assert!(draft.clone().validate(DescriptionPolicy::Optional).is_ok());
        assert_eq!(
            draft.validate(DescriptionPolicy::Required),
            Err(CoreError::Validation(vec!["discription"]))
        );
    }

    #[test]
    fn test_item_wire_format() {
        let draft: ItemDraft =
            serde_json::from_value(json!({"name": "Widget", "discription": "x"})).unwrap();
        let item = Item::from_fields(3, draft.validate(DescriptionPolicy::Optional).unwrap());
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": 3, "name": "Widget", "discription": "x"})
        );

        let bare = Item::from_fields(4, ItemFields { name: "Bare".into(), description: None });
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"id": 4, "name": "Bare"}));
    }
}

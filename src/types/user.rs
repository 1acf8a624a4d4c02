use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /users/`.
///
/// `id` is accepted for compatibility with clients that send it, but storage
/// always assigns the identifier.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RUserCreate {
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    pub password: String,
}

/// Body of `PUT /users/{user_id}`. Every field may be omitted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct RUserUpdate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// The fields an update will actually overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl RUserUpdate {
    /// An empty string means "leave unchanged", same as an omitted field.
    pub fn changes(self) -> UserChanges {
        fn non_empty(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }

        UserChanges {
            name: non_empty(self.name),
            email: non_empty(self.email),
            password: non_empty(self.password),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserRes {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserModel> for UserRes {
    fn from(m: UserModel) -> Self {
        UserRes {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let update = RUserUpdate {
            id: None,
            name: Some(String::new()),
            email: Some("a2@x.com".to_string()),
            password: Some(String::new()),
        };

        assert_eq!(
            update.changes(),
            UserChanges {
                name: None,
                email: Some("a2@x.com".to_string()),
                password: None,
            }
        );
    }

    #[test]
    fn omitted_fields_deserialize_as_absent() {
        let update: RUserUpdate = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        let changes = update.changes();
        assert_eq!(changes.name.as_deref(), Some("Bob"));
        assert!(changes.email.is_none());
        assert!(changes.password.is_none());
    }

    #[test]
    fn all_empty_update_has_no_changes() {
        let update: RUserUpdate =
            serde_json::from_str(r#"{"id": 7, "name": "", "email": "", "password": ""}"#).unwrap();
        assert!(update.changes().is_empty());
    }

    #[test]
    fn create_body_requires_email() {
        let res = serde_json::from_str::<RUserCreate>(r#"{"name": "Alice", "password": "p1"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn response_omits_password() {
        let res = UserRes::from(UserModel {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        });
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Alice", "email": "a@x.com"}));
    }
}

//! Team user and invitation resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// A member of the App Store Connect team.
pub type User = Resource<UserAttributes>;

/// Attributes of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_apps_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_allowed: Option<bool>,
}

/// A pending invitation to join the team.
pub type UserInvitation = Resource<UserInvitationAttributes>;

/// Attributes of a [`UserInvitation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserInvitationAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_apps_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_allowed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_roles_decode_in_order() {
        let json = r#"{"username":"dev@example.com","roles":["ADMIN","DEVELOPER"]}"#;
        let attributes: UserAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(
            attributes.roles.unwrap(),
            vec!["ADMIN".to_string(), "DEVELOPER".to_string()]
        );
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use super::users::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Role attribute of the signed-in user.
///
/// Any role string the client does not know decodes as `Unknown`, so a new
/// backend role never breaks session parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Technician,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Current user as reported by `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "role_or_unknown")]
    pub role: Role,
}

/// `"role": null` reads the same as a missing role
fn role_or_unknown<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Role>::deserialize(deserializer)?.unwrap_or_default())
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_null_role() -> SessionUser {
        serde_json::from_value(serde_json::json!({
            "id": "7f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "username": "anna",
            "role": null,
        }))
        .unwrap()
    }

    fn parse(role: serde_json::Value) -> SessionUser {
        let mut json = serde_json::json!({
            "id": "7f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "username": "anna",
        });
        if !role.is_null() {
            json["role"] = role;
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_known_roles() {
        assert_eq!(parse("admin".into()).role, Role::Admin);
        assert_eq!(parse("manager".into()).role, Role::Manager);
        assert_eq!(parse("technician".into()).role, Role::Technician);
    }

    #[test]
    fn test_unknown_or_absent_role() {
        assert_eq!(parse("accountant".into()).role, Role::Unknown);
        assert_eq!(parse(serde_json::Value::Null).role, Role::Unknown);
        assert_eq!(parse_with_null_role().role, Role::Unknown);
    }
}

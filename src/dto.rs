use serde::{Deserialize, Serialize};

/// Account role. Exactly three values; decides which dashboard variant is
/// rendered and which routes are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Agent,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "customer" => Some(Role::Customer),
            "agent" => Some(Role::Agent),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketDto {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub status_id: i64,
    pub status_name: Option<String>,
    pub priority_id: i64,
    pub priority_name: Option<String>,
    pub created_by: i64,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub ticket_id: i64,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub content: String,
    pub created_at: String,
}

/// Row of `GET /priorities` and `GET /statuses`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupDto {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Customer).expect("json"), "\"customer\"");
        assert_eq!(serde_json::to_string(&Role::Agent).expect("json"), "\"agent\"");
        assert_eq!(serde_json::to_string(&Role::Admin).expect("json"), "\"admin\"");
    }

    #[test]
    fn role_parse_matches_serde() {
        for role in [Role::Customer, Role::Agent, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn user_deserializes_from_backend_shape() {
        let user: UserDto = serde_json::from_str(
            r#"{"id":7,"name":"Dana","email":"dana@example.com","role":"agent","is_active":true,"created_at":"2026-01-02T03:04:05Z"}"#,
        )
        .expect("user json");
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Agent);
        assert!(user.is_active);
    }

    #[test]
    fn ticket_tolerates_missing_optional_fields() {
        let ticket: TicketDto = serde_json::from_str(
            r#"{"id":1,"subject":"s","description":"d","status_id":1,"priority_id":2,"created_by":3,"created_at":"t0","updated_at":"t1"}"#,
        )
        .expect("ticket json");
        assert_eq!(ticket.status_name, None);
        assert_eq!(ticket.assigned_to, None);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Account role, fixed at registration.
///
/// The wire form is snake_case. `user` is accepted on input as the legacy name of
/// `member`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "user")]
    Member,
    BusinessOwner,
    EventOwner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::BusinessOwner => "business_owner",
            Role::EventOwner => "event_owner",
        }
    }

    /// Whether accounts with this role get an owner profile at registration.
    pub fn has_owner_profile(&self) -> bool {
        match self {
            Role::Member => false,
            Role::BusinessOwner | Role::EventOwner => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" | "user" => Ok(Role::Member),
            "business_owner" => Ok(Role::BusinessOwner),
            "event_owner" => Ok(Role::EventOwner),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Registration request.
///
/// Text fields default to empty so that absent and blank values are rejected with the
/// same validation message. `type` is accepted as an alias of `role`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "type")]
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login: the account plus a freshly issued bearer token.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

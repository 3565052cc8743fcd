//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use handcrafted_haven_core::{Email, Role, UserId};

use super::User;

/// Session-stored user identity.
///
/// The account type is kept as the raw string written at login so that a
/// session outliving a schema change still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Raw account type attribute.
    pub account_type: Option<String>,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            account_type: Some(user.account_type.clone()),
        }
    }
}

/// A resolved session: the stored identity plus its role.
///
/// Built once per request by the auth extractor; handlers dispatch on
/// [`SessionUser::role`] with a `match`.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl From<CurrentUser> for SessionUser {
    fn from(user: CurrentUser) -> Self {
        Self {
            role: Role::resolve(user.account_type.as_deref()),
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn current_user(account_type: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: UserId::from_u128(7),
            name: "Rosa".to_owned(),
            email: Email::parse("rosa@haven.example").unwrap(),
            account_type: account_type.map(str::to_owned),
        }
    }

    #[test]
    fn test_role_resolved_once_from_session() {
        assert_eq!(SessionUser::from(current_user(Some("artisan"))).role, Role::Artisan);
        assert_eq!(
            SessionUser::from(current_user(Some("customer"))).role,
            Role::Customer
        );
        assert_eq!(
            SessionUser::from(current_user(None)).role,
            Role::Unknown(None)
        );
    }

    #[test]
    fn test_session_survives_json_round_trip() {
        let json = serde_json::to_value(current_user(Some("customer"))).unwrap();
        assert_eq!(json["account_type"], "customer");
        let back: CurrentUser = serde_json::from_value(json).unwrap();
        assert_eq!(back.name, "Rosa");
    }
}

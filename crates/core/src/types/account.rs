//! Account classification for marketplace users.
//!
//! Storage knows exactly two account types (enforced by a CHECK constraint),
//! while a session may carry an unexpected value or none at all.
//! [`AccountType`] is the strict storage enum; [`Role`] is what a resolved
//! session dispatches on.

use serde::{Deserialize, Serialize};

/// Account type as stored in the `users.account_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// A seller listing handmade products.
    Artisan,
    /// A buyer browsing and reviewing products.
    Customer,
}

impl AccountType {
    /// The column value for this account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artisan => "artisan",
            Self::Customer => "customer",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artisan" => Ok(Self::Artisan),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid account type: {s}")),
        }
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for AccountType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AccountType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse::<Self>()?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for AccountType {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// The role a resolved session renders as.
///
/// Unknown and missing account types are tolerated and rendered with a
/// generic dashboard rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Buyer dashboard.
    Customer,
    /// Seller dashboard.
    Artisan,
    /// Anything else; carries the raw value (if any) for display.
    Unknown(Option<String>),
}

impl Role {
    /// Resolve a raw session attribute into a role.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<AccountType>) {
            Some(Ok(AccountType::Customer)) => Self::Customer,
            Some(Ok(AccountType::Artisan)) => Self::Artisan,
            Some(Err(_)) => Self::Unknown(raw.map(str::to_owned)),
            None => Self::Unknown(None),
        }
    }

    /// Whether this role may list products for sale.
    #[must_use]
    pub const fn is_artisan(&self) -> bool {
        matches!(self, Self::Artisan)
    }

    /// Human-readable account type, `"Not set"` when missing.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Customer => "customer",
            Self::Artisan => "artisan",
            Self::Unknown(Some(raw)) if !raw.is_empty() => raw.as_str(),
            Self::Unknown(_) => "Not set",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_round_trips_column_values() {
        for account_type in [AccountType::Artisan, AccountType::Customer] {
            assert_eq!(account_type.as_str().parse::<AccountType>(), Ok(account_type));
        }
        assert!("admin".parse::<AccountType>().is_err());
        assert!("Customer".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_role_resolve_known() {
        assert_eq!(Role::resolve(Some("customer")), Role::Customer);
        assert_eq!(Role::resolve(Some("artisan")), Role::Artisan);
    }

    #[test]
    fn test_role_resolve_tolerates_unknown() {
        assert_eq!(
            Role::resolve(Some("wholesaler")),
            Role::Unknown(Some("wholesaler".to_owned()))
        );
        assert_eq!(Role::resolve(None), Role::Unknown(None));
    }

    #[test]
    fn test_role_label() {
        assert_eq!(Role::Customer.label(), "customer");
        assert_eq!(Role::resolve(Some("wholesaler")).label(), "wholesaler");
        assert_eq!(Role::resolve(None).label(), "Not set");
        assert_eq!(Role::resolve(Some("")).label(), "Not set");
    }

    #[test]
    fn test_only_artisans_sell() {
        assert!(Role::Artisan.is_artisan());
        assert!(!Role::Customer.is_artisan());
        assert!(!Role::Unknown(None).is_artisan());
    }
}

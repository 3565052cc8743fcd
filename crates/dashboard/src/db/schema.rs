//! Marketplace DDL.
//!
//! Each statement is safe to re-run. Order matters: `products` references
//! `users`, and `reviews` references both.
//!
//! `IF NOT EXISTS` alone does not make concurrent runs safe: two sessions can
//! both miss the catalog entry and one then fails on a unique index. [`apply`]
//! serializes DDL behind a transaction-scoped advisory lock.

use sqlx::PgPool;

/// Advisory lock key held while DDL runs.
pub const DDL_LOCK_KEY: i64 = 0x4848_5343_4845_4d41;

/// Enables `uuid_generate_v4()` for the id column defaults.
pub const UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

pub const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
      id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
      name VARCHAR(255) NOT NULL,
      email TEXT NOT NULL UNIQUE,
      password TEXT NOT NULL,
      account_type TEXT NOT NULL CHECK (account_type IN ('artisan', 'customer'))
    )
";

pub const CREATE_PRODUCTS: &str = r"
    CREATE TABLE IF NOT EXISTS products (
      id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
      name TEXT NOT NULL,
      image_url TEXT NOT NULL,
      price INT NOT NULL,
      description TEXT NOT NULL,
      category TEXT NOT NULL,
      seller_id UUID REFERENCES users(id)
    )
";

pub const CREATE_REVIEWS: &str = r"
    CREATE TABLE IF NOT EXISTS reviews (
      id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
      product_id UUID REFERENCES products(id),
      user_id UUID REFERENCES users(id),
      content TEXT NOT NULL
    )
";

/// All statements in creation order.
pub const ALL: &[&str] = &[UUID_EXTENSION, CREATE_USERS, CREATE_PRODUCTS, CREATE_REVIEWS];

/// Run `statements` in one transaction holding [`DDL_LOCK_KEY`].
///
/// A concurrent caller blocks on the lock until the first commits, then sees
/// the objects it created.
///
/// # Errors
///
/// Returns `sqlx::Error` if the lock or any statement fails; nothing is
/// committed in that case.
pub async fn apply(pool: &PgPool, statements: &[&str]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(DDL_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for statement in statements {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_are_rerunnable() {
        for statement in ALL {
            assert!(statement.contains("IF NOT EXISTS"), "{statement}");
        }
    }

    #[test]
    fn test_referenced_tables_come_first() {
        let position = |needle: &str| ALL.iter().position(|s| s.contains(needle));
        assert!(position("TABLE IF NOT EXISTS users") < position("TABLE IF NOT EXISTS products"));
        assert!(position("TABLE IF NOT EXISTS products") < position("TABLE IF NOT EXISTS reviews"));
        assert_eq!(position("uuid-ossp"), Some(0));
    }
}

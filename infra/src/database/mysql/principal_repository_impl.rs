//! MySQL implementation of the PrincipalRepository trait.
//!
//! Persists both principal kinds in a single `principals` table with a
//! unique index on email, so the unified-namespace uniqueness guarantee is
//! enforced by the database and survives concurrent registration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::principal::{
    OrganizationProfile, Principal, PrincipalKind, Role,
};
use sg_core::errors::{DomainError, StoreError};
use sg_core::repositories::PrincipalRepository;

/// MySQL implementation of PrincipalRepository
pub struct MySqlPrincipalRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPrincipalRepository {
    /// Create a new MySQL principal repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn store_error(context: &str, e: sqlx::Error) -> DomainError {
        StoreError::Unavailable {
            message: format!("{}: {}", context, e),
        }
        .into()
    }

    /// Maps an insert/update error, distinguishing unique-key violations
    fn write_error(context: &str, e: sqlx::Error) -> DomainError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateEmail.into();
            }
        }
        Self::store_error(context, e)
    }

    /// Convert a database row to a Principal entity
    fn row_to_principal(row: &sqlx::mysql::MySqlRow) -> Result<Principal, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::store_error("Failed to get id", e))?;

        let kind_str: String = row
            .try_get("kind")
            .map_err(|e| Self::store_error("Failed to get kind", e))?;
        let kind = match kind_str.as_str() {
            "user" => PrincipalKind::User,
            "organization" => PrincipalKind::Organization,
            other => {
                return Err(StoreError::Unavailable {
                    message: format!("Unknown principal kind: {}", other),
                }
                .into())
            }
        };

        let role_str: String = row
            .try_get("role")
            .map_err(|e| Self::store_error("Failed to get role", e))?;
        let role = match role_str.as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        };

        let profile = if kind == PrincipalKind::Organization {
            Some(OrganizationProfile {
                display_name: Self::profile_field(row, "display_name")?,
                organization: Self::profile_field(row, "organization")?,
                phone_number: Self::profile_field(row, "phone_number")?,
                alternate_phone_number: row
                    .try_get("alternate_phone_number")
                    .map_err(|e| Self::store_error("Failed to get alternate_phone_number", e))?,
                address: Self::profile_field(row, "address")?,
                state: Self::profile_field(row, "state")?,
                landmark: Self::profile_field(row, "landmark")?,
                position: Self::profile_field(row, "position")?,
                next_of_kin: Self::profile_field(row, "next_of_kin")?,
            })
        } else {
            None
        };

        Ok(Principal {
            id: Uuid::parse_str(&id).map_err(|e| StoreError::Unavailable {
                message: format!("Invalid UUID: {}", e),
            })?,
            kind,
            email: row
                .try_get("email")
                .map_err(|e| Self::store_error("Failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| Self::store_error("Failed to get password_hash", e))?,
            role,
            profile,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::store_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| Self::store_error("Failed to get updated_at", e))?,
        })
    }

    /// Reads a required organization profile column
    fn profile_field(row: &sqlx::mysql::MySqlRow, column: &str) -> Result<String, DomainError> {
        let value: Option<String> = row
            .try_get(column)
            .map_err(|e| Self::store_error("Failed to get profile field", e))?;
        value.ok_or_else(|| {
            StoreError::Unavailable {
                message: format!("Organization row missing {}", column),
            }
            .into()
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, kind, email, password_hash, role,
           display_name, organization, phone_number, alternate_phone_number,
           address, state, landmark, position, next_of_kin,
           created_at, updated_at
    FROM principals
"#;

#[async_trait]
impl PrincipalRepository for MySqlPrincipalRepository {
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, DomainError> {
        let query = format!("{} WHERE kind = ? AND email = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(kind.as_str())
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to find principal by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_principal(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to find principal by id", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_principal(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, principal: Principal) -> Result<Principal, DomainError> {
        let query = r#"
            INSERT INTO principals (
                id, kind, email, password_hash, role,
                display_name, organization, phone_number, alternate_phone_number,
                address, state, landmark, position, next_of_kin,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let profile = principal.profile.as_ref();

        // The unique index on email makes this the atomic uniqueness check;
        // a duplicate-key error here means a concurrent writer won the race.
        sqlx::query(query)
            .bind(principal.id.to_string())
            .bind(principal.kind.as_str())
            .bind(&principal.email)
            .bind(&principal.password_hash)
            .bind(principal.role.as_str())
            .bind(profile.map(|p| p.display_name.as_str()))
            .bind(profile.map(|p| p.organization.as_str()))
            .bind(profile.map(|p| p.phone_number.as_str()))
            .bind(profile.and_then(|p| p.alternate_phone_number.as_deref()))
            .bind(profile.map(|p| p.address.as_str()))
            .bind(profile.map(|p| p.state.as_str()))
            .bind(profile.map(|p| p.landmark.as_str()))
            .bind(profile.map(|p| p.position.as_str()))
            .bind(profile.map(|p| p.next_of_kin.as_str()))
            .bind(principal.created_at)
            .bind(principal.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("Failed to create principal", e))?;

        Ok(principal)
    }

    async fn update(&self, principal: Principal) -> Result<Principal, DomainError> {
        let query = r#"
            UPDATE principals SET
                email = ?,
                password_hash = ?,
                role = ?,
                display_name = ?,
                organization = ?,
                phone_number = ?,
                alternate_phone_number = ?,
                address = ?,
                state = ?,
                landmark = ?,
                position = ?,
                next_of_kin = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let profile = principal.profile.as_ref();
        let updated_at = Utc::now();

        let result = sqlx::query(query)
            .bind(&principal.email)
            .bind(&principal.password_hash)
            .bind(principal.role.as_str())
            .bind(profile.map(|p| p.display_name.as_str()))
            .bind(profile.map(|p| p.organization.as_str()))
            .bind(profile.map(|p| p.phone_number.as_str()))
            .bind(profile.and_then(|p| p.alternate_phone_number.as_deref()))
            .bind(profile.map(|p| p.address.as_str()))
            .bind(profile.map(|p| p.state.as_str()))
            .bind(profile.map(|p| p.landmark.as_str()))
            .bind(profile.map(|p| p.position.as_str()))
            .bind(profile.map(|p| p.next_of_kin.as_str()))
            .bind(updated_at)
            .bind(principal.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("Failed to update principal", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound.into());
        }

        let mut updated = principal;
        updated.updated_at = updated_at;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<Principal, DomainError> {
        // Fetch first so the removed record can be returned
        let principal = self
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Store(StoreError::NotFound))?;

        let result = sqlx::query("DELETE FROM principals WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("Failed to delete principal", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound.into());
        }

        Ok(principal)
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DomainError> {
        let row = match exclude {
            Some(id) => {
                sqlx::query(
                    "SELECT EXISTS(SELECT 1 FROM principals WHERE email = ? AND id <> ?) AS taken",
                )
                .bind(email)
                .bind(id.to_string())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT EXISTS(SELECT 1 FROM principals WHERE email = ?) AS taken")
                    .bind(email)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| Self::store_error("Failed to check email existence", e))?;

        let taken: i8 = row
            .try_get("taken")
            .map_err(|e| Self::store_error("Failed to get existence result", e))?;

        Ok(taken == 1)
    }
}

//! `SQLite` implementation of [`ProfileRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minimdm_app::ports::ProfileRepository;
use minimdm_domain::error::{ConflictError, MdmError};
use minimdm_domain::id::ProfileId;
use minimdm_domain::profile::Profile;

use crate::error::{StorageError, is_unique_violation};

/// Wrapper for converting database rows into domain [`Profile`].
struct Wrapper(Profile);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let id = ProfileId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Profile {
            id,
            payload_identifier: row.try_get("payload_identifier")?,
            data: row.try_get("data")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO profiles (id, payload_identifier, data) VALUES (?, ?, ?)";
const SELECT_BY_IDENTIFIER: &str = "SELECT * FROM profiles WHERE payload_identifier = ?";
const SELECT_ALL: &str = "SELECT * FROM profiles ORDER BY rowid";

/// `SQLite`-backed profile repository.
pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for SqliteProfileRepository {
    fn create(&self, profile: Profile) -> impl Future<Output = Result<Profile, MdmError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(profile.id.to_string())
                .bind(&profile.payload_identifier)
                .bind(&profile.data)
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(profile),
                Err(err) if is_unique_violation(&err) => {
                    Err(MdmError::from(ConflictError::ProfileExists {
                        payload_identifier: profile.payload_identifier,
                    }))
                }
                Err(err) => Err(MdmError::from(StorageError::from(err))),
            }
        }
    }

    fn find_by_payload_identifier(
        &self,
        payload_identifier: &str,
    ) -> impl Future<Output = Result<Option<Profile>, MdmError>> + Send {
        let pool = self.pool.clone();
        let payload_identifier = payload_identifier.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_IDENTIFIER)
                .bind(payload_identifier)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, MdmError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

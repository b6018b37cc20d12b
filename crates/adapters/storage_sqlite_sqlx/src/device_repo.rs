//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minimdm_app::ports::DeviceRepository;
use minimdm_domain::device::{Device, ProfileStatus};
use minimdm_domain::error::MdmError;
use minimdm_domain::id::DeviceId;
use minimdm_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let profile_status: String = row.try_get("profile_status")?;
        let device_assigned_date: Option<String> = row.try_get("device_assigned_date")?;

        let id = DeviceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let profile_status = ProfileStatus::from_str(&profile_status)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let device_assigned_date = device_assigned_date
            .as_deref()
            .map(time::parse_rfc3339)
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Device {
            id,
            serial_number: row.try_get("serial_number")?,
            model: row.try_get("model")?,
            description: row.try_get("description")?,
            color: row.try_get("color")?,
            asset_tag: row.try_get("asset_tag")?,
            profile_status,
            device_assigned_by: row.try_get("device_assigned_by")?,
            device_assigned_date,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (id, serial_number, model, description, color, asset_tag, profile_status, device_assigned_by, device_assigned_date) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_SERIAL: &str = "SELECT * FROM devices WHERE serial_number = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY serial_number";
const UPDATE: &str = "UPDATE devices SET serial_number = ?, model = ?, description = ?, color = ?, asset_tag = ?, profile_status = ?, device_assigned_by = ?, device_assigned_date = ? WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(device.id.to_string())
                .bind(&device.serial_number)
                .bind(&device.model)
                .bind(&device.description)
                .bind(&device.color)
                .bind(&device.asset_tag)
                .bind(device.profile_status.as_str())
                .bind(&device.device_assigned_by)
                .bind(device.device_assigned_date.as_ref().map(time::to_rfc3339))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> impl Future<Output = Result<Option<Device>, MdmError>> + Send {
        let pool = self.pool.clone();
        let serial_number = serial_number.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SERIAL)
                .bind(serial_number)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&device.serial_number)
                .bind(&device.model)
                .bind(&device.description)
                .bind(&device.color)
                .bind(&device.asset_tag)
                .bind(device.profile_status.as_str())
                .bind(&device.device_assigned_by)
                .bind(device.device_assigned_date.as_ref().map(time::to_rfc3339))
                .bind(device.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }
}

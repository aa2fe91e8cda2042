use deposit_core_db::models::rate_type::RateTypeModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct RateTypeRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl RateTypeRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for RateTypeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(RateTypeModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            rate: row.try_get("rate")?,
        })
    }
}

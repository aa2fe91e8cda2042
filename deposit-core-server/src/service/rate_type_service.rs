use std::sync::Arc;

use deposit_core_api::error::{ApiError, ApiResult};
use deposit_core_db::models::rate_type::{NewRateTypeModel, RateTypeModel, RATE_TYPE_NAME_MAX_LEN};
use deposit_core_db::repository::rate_type_repository::RateTypeRepository;
use deposit_core_db::repository::{Create, Delete, FindAll, FindById, Update};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use sqlx::Postgres;

/// Scale of the `rate_type.rate` column.
const RATE_SCALE: u32 = 4;

/// Registry of rate types.
pub struct RateTypeService {
    repository: Arc<dyn RateTypeRepository<Postgres>>,
}

impl RateTypeService {
    pub fn new(repository: Arc<dyn RateTypeRepository<Postgres>>) -> Self {
        Self { repository }
    }

    /// All rate types, ordered by id.
    pub async fn list(&self) -> ApiResult<Vec<RateTypeModel>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<RateTypeModel>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn create(&self, name: &str, rate: Decimal) -> ApiResult<RateTypeModel> {
        let new = validated(name, rate)?;
        let saved = self.repository.create(new).await?;
        tracing::info!(rate_type_id = saved.id, name = %saved.name, rate = %saved.rate, "rate type created");
        Ok(saved)
    }

    /// Replaces name and rate. Returns `None` when the rate type does not exist,
    /// which is checked before the new values are validated.
    pub async fn update(&self, id: i64, name: &str, rate: Decimal) -> ApiResult<Option<RateTypeModel>> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let new = validated(name, rate)?;
        let updated = self
            .repository
            .update(RateTypeModel::from_new(id, new))
            .await?;
        if updated.is_some() {
            tracing::info!(rate_type_id = id, "rate type updated");
        }
        Ok(updated)
    }

    /// Deletes the rate type and, through the cascade, its deposit accounts.
    pub async fn delete(&self, id: i64) -> ApiResult<bool> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(rate_type_id = id, "rate type deleted");
        }
        Ok(deleted)
    }
}

fn validated(name: &str, rate: Decimal) -> ApiResult<NewRateTypeModel> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidArgument("Le nom ne peut pas être vide".to_string()));
    }
    let too_long = || {
        ApiError::InvalidArgument(format!(
            "Le nom ne peut pas dépasser {RATE_TYPE_NAME_MAX_LEN} caractères"
        ))
    };
    if name.chars().count() > RATE_TYPE_NAME_MAX_LEN {
        return Err(too_long());
    }

    let rate = rate.round_dp(RATE_SCALE);
    if rate <= Decimal::ZERO {
        return Err(ApiError::InvalidArgument(
            "Le taux d'intérêt doit être positif".to_string(),
        ));
    }
    if rate > Decimal::ONE {
        return Err(ApiError::InvalidArgument(
            "Le taux d'intérêt ne peut pas dépasser 1".to_string(),
        ));
    }

    Ok(NewRateTypeModel {
        name: HeaplessString::try_from(name).map_err(|_| too_long())?,
        rate,
    })
}

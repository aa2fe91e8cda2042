use deposit_core_db::models::rate_type::RateTypeModel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Lowest accepted rate on the wire (one basis point).
pub const MIN_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);
pub const MAX_RATE: Decimal = Decimal::ONE;

/// Body of `POST /type-comptes-depots` and `PUT /type-comptes-depots/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateTypeRequest {
    /// Trimmed and length-checked by the registry.
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(custom(function = "validate_rate_range"))]
    pub taux_interet: Decimal,
}

fn validate_rate_range(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < MIN_RATE || *rate > MAX_RATE {
        return Err(ValidationError::new("rate_range"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTypeResponse {
    pub id: i64,
    pub nom: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub taux_interet: Decimal,
}

impl From<RateTypeModel> for RateTypeResponse {
    fn from(model: RateTypeModel) -> Self {
        Self {
            id: model.id,
            nom: model.name.as_str().to_string(),
            taux_interet: model.rate,
        }
    }
}

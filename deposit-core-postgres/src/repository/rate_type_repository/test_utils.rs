use deposit_core_db::models::rate_type::NewRateTypeModel;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;

pub fn create_test_rate_type(name: &str, rate: Decimal) -> NewRateTypeModel {
    NewRateTypeModel {
        name: HeaplessString::try_from(name).unwrap(),
        rate,
    }
}

pub mod condition;
pub mod suitability;
pub mod wind_speed;

pub mod fuel_type;
pub mod period;
pub mod record;
pub mod settings;
pub mod summary;

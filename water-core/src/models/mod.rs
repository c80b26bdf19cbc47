mod crop_type;
mod farm_input;
mod invalid_input;
mod irrigation_method;
mod optimization;
mod soil_type;
mod water_usage;

pub use crop_type::CropType;
pub use farm_input::FarmInput;
pub use invalid_input::InvalidInput;
pub use irrigation_method::IrrigationMethod;
pub use optimization::{MethodComparison, OptimizationResult};
pub use soil_type::SoilType;
pub use water_usage::WaterUsageResult;

use thiserror::Error;

/// A selector value outside one of the closed enumerations.
///
/// Returned when parsing a [`CropType`](super::CropType),
/// [`IrrigationMethod`](super::IrrigationMethod) or
/// [`SoilType`](super::SoilType) from an unrecognised key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field} '{value}' (expected one of: {expected})")]
pub struct InvalidInput {
    /// Name of the offending field, e.g. `"crop type"`.
    pub field: &'static str,
    /// The rejected value as supplied by the caller.
    pub value: String,
    /// Comma separated list of accepted keys.
    pub expected: &'static str,
}

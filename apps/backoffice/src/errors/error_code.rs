//! Error codes for the backoffice HTTP surface.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in Problem Details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path segment is not a valid identifier
    InvalidId,
    /// City name empty or too long
    InvalidCityName,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    DistrictNotFound,
    CityNotFound,
    StateNotFound,
    ProductPackageNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidCityName => "INVALID_CITY_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DistrictNotFound => "DISTRICT_NOT_FOUND",
            Self::CityNotFound => "CITY_NOT_FOUND",
            Self::StateNotFound => "STATE_NOT_FOUND",
            Self::ProductPackageNotFound => "PRODUCT_PACKAGE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

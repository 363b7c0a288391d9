use std::io;

use thiserror::Error;

/// Library-wide error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure while loading a catalog file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A name field was blank or absent.
    #[error("{what} name is required")]
    NameRequired { what: &'static str },

    /// Star radius at or below the minimum.
    #[error("Star radius must be greater than 20000 km (got {radius})")]
    StarRadiusOutOfBand { radius: f64 },

    /// Planet radius outside the band permitted by its star.
    #[error("Planet radius must be between 1000 km and {max} km, exclusive (got {radius})")]
    PlanetRadiusOutOfBand { radius: f64, max: f64 },

    /// Planet orbit radius outside the band permitted by its star.
    #[error("Planet orbit radius must be between {min} km and {max} km (got {orbit_radius})")]
    PlanetOrbitOutOfBand { orbit_radius: f64, min: f64, max: f64 },

    /// Moon radius outside the band permitted by its planet.
    #[error("Moon radius must be between 10 km and {max} km, exclusive (got {radius})")]
    MoonRadiusOutOfBand { radius: f64, max: f64 },

    /// Moon orbit radius below the minimum permitted by its planet.
    #[error("Moon orbit radius must be at least {min} km (got {orbit_radius})")]
    MoonOrbitOutOfBand { orbit_radius: f64, min: f64 },

    /// No solar system registered under the given name.
    #[error("Solar system '{0}' not found")]
    SystemNotFound(String),

    /// No planet with the given name in the resolved system.
    #[error("Planet '{0}' not found")]
    PlanetNotFound(String),

    /// No moon with the given name on the resolved planet.
    #[error("Moon '{0}' not found")]
    MoonNotFound(String),

    /// An operation needed a current selection and none was set.
    #[error("No solar system selected")]
    NoSystemSelected,

    /// A solar system with this name is already registered.
    #[error("Solar system '{0}' already exists")]
    DuplicateSystem(String),

    /// A planet with this name already exists in the target system.
    #[error("Planet '{0}' already exists in this solar system")]
    DuplicatePlanet(String),

    /// A moon with this name already exists on the target planet.
    #[error("Moon '{0}' already exists on this planet")]
    DuplicateMoon(String),

    /// Free-text numeric input did not parse as a number.
    #[error("Invalid {what} '{input}': expected a number")]
    InvalidNumber { what: &'static str, input: String },

    /// A catalog file line violated the expected record format.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Recoverable failure categories, for callers that render or branch on
/// the kind of failure rather than the specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Validation,
    NotFound,
    Uniqueness,
    Parse,
    MalformedRecord,
    Io,
}

impl CatalogError {
    /// Categorize this error for presentation-layer branching.
    pub fn category(&self) -> FailureCategory {
        match self {
            CatalogError::Io(_) => FailureCategory::Io,
            CatalogError::NameRequired { .. }
            | CatalogError::StarRadiusOutOfBand { .. }
            | CatalogError::PlanetRadiusOutOfBand { .. }
            | CatalogError::PlanetOrbitOutOfBand { .. }
            | CatalogError::MoonRadiusOutOfBand { .. }
            | CatalogError::MoonOrbitOutOfBand { .. } => FailureCategory::Validation,
            CatalogError::SystemNotFound(_)
            | CatalogError::PlanetNotFound(_)
            | CatalogError::MoonNotFound(_)
            | CatalogError::NoSystemSelected => FailureCategory::NotFound,
            CatalogError::DuplicateSystem(_)
            | CatalogError::DuplicatePlanet(_)
            | CatalogError::DuplicateMoon(_) => FailureCategory::Uniqueness,
            CatalogError::InvalidNumber { .. } => FailureCategory::Parse,
            CatalogError::MalformedRecord { .. } => FailureCategory::MalformedRecord,
        }
    }
}

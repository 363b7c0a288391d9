use serde::Serialize;

use super::CatalogError;

/// Minimum star radius in km; the bound itself is invalid.
pub const MIN_STAR_RADIUS: f64 = 20000.0;

/// The central star of a solar system.
///
/// Guarantees:
/// - Non-blank name
/// - `radius > 20000` km (strictly greater; exactly 20000 is rejected)
///
/// Immutable after construction. Planets hold their own cloned copy, so
/// removing the live star from a system never invalidates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    name: String,
    radius: f64,
}

impl Star {
    /// Validate and create a new `Star`.
    pub fn new(name: &str, radius: f64) -> Result<Self, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::NameRequired { what: "star" });
        }
        if radius <= MIN_STAR_RADIUS {
            return Err(CatalogError::StarRadiusOutOfBand { radius });
        }
        Ok(Self { name: name.to_string(), radius })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.radius)
    }
}

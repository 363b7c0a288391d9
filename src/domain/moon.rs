use serde::Serialize;

use super::{CatalogError, Planet};

/// Minimum moon radius in km; the bound itself is invalid.
pub const MIN_MOON_RADIUS: f64 = 10.0;

/// Divisor applied to the parent planet's radius for the moon radius cap.
pub const MOON_RADIUS_DIVISOR: f64 = 17.0;

/// Multiplier applied to the parent planet's radius for the orbit floor.
pub const MOON_ORBIT_FACTOR: f64 = 5.0;

/// Immutable view of a parent planet taken when a moon is built.
///
/// A moon validates against the planet as it was at construction time;
/// later mutation or removal of the live planet does not reach back into
/// moons that already exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetSnapshot {
    name: String,
    radius: f64,
}

impl PlanetSnapshot {
    pub(crate) fn of(planet: &Planet) -> Self {
        Self { name: planet.name().to_string(), radius: planet.radius() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A moon orbiting a planet.
///
/// Guarantees:
/// - Non-blank name
/// - `10 < radius < parent.radius / 17` (both bounds strict)
/// - `orbit_radius >= parent.radius * 5`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moon {
    name: String,
    radius: f64,
    orbit_radius: f64,
    parent_planet: PlanetSnapshot,
}

impl Moon {
    /// Validate and create a new `Moon` around the given planet.
    pub fn new(
        name: &str,
        radius: f64,
        orbit_radius: f64,
        parent_planet: &Planet,
    ) -> Result<Self, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::NameRequired { what: "moon" });
        }
        let max_radius = parent_planet.radius() / MOON_RADIUS_DIVISOR;
        if radius <= MIN_MOON_RADIUS || radius >= max_radius {
            return Err(CatalogError::MoonRadiusOutOfBand { radius, max: max_radius });
        }
        let min_orbit = parent_planet.radius() * MOON_ORBIT_FACTOR;
        if orbit_radius < min_orbit {
            return Err(CatalogError::MoonOrbitOutOfBand { orbit_radius, min: min_orbit });
        }
        Ok(Self {
            name: name.to_string(),
            radius,
            orbit_radius,
            parent_planet: PlanetSnapshot::of(parent_planet),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    /// The parent planet as it was when this moon was constructed.
    pub fn parent_planet(&self) -> &PlanetSnapshot {
        &self.parent_planet
    }
}

impl std::fmt::Display for Moon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.radius, self.orbit_radius)
    }
}

use std::cmp::Ordering;

use serde::Serialize;

use super::{CatalogError, Moon, Star};

/// Minimum planet radius in km; the bound itself is invalid.
pub const MIN_PLANET_RADIUS: f64 = 1000.0;

/// Divisor applied to the parent star's radius for the planet radius cap.
pub const PLANET_RADIUS_DIVISOR: f64 = 10.0;

/// Multiplier applied to the parent star's radius for the orbit floor.
pub const PLANET_ORBIT_MIN_FACTOR: f64 = 10.0;

/// Multiplier applied to the parent star's radius for the orbit ceiling
/// enforced at the catalog surface.
pub const PLANET_ORBIT_MAX_FACTOR: f64 = 20.0;

/// A planet orbiting a star, owning an ordered collection of moons.
///
/// Guarantees at construction:
/// - Non-blank name
/// - `1000 < radius < parent.radius / 10` (both bounds strict)
/// - `orbit_radius >= parent.radius * 10`
///
/// The parent star is cloned in, so the planet keeps validating and
/// rendering consistently even after the live star is removed from its
/// system. Moon names are unique per planet; moons keep insertion order
/// until explicitly sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    name: String,
    radius: f64,
    orbit_radius: f64,
    parent_star: Star,
    moons: Vec<Moon>,
}

impl Planet {
    /// Validate and create a new `Planet` around the given star.
    pub fn new(
        name: &str,
        radius: f64,
        orbit_radius: f64,
        parent_star: &Star,
    ) -> Result<Self, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::NameRequired { what: "planet" });
        }
        let max_radius = parent_star.radius() / PLANET_RADIUS_DIVISOR;
        if radius <= MIN_PLANET_RADIUS || radius >= max_radius {
            return Err(CatalogError::PlanetRadiusOutOfBand { radius, max: max_radius });
        }
        let min_orbit = parent_star.radius() * PLANET_ORBIT_MIN_FACTOR;
        if orbit_radius < min_orbit {
            return Err(CatalogError::PlanetOrbitOutOfBand {
                orbit_radius,
                min: min_orbit,
                max: parent_star.radius() * PLANET_ORBIT_MAX_FACTOR,
            });
        }
        Ok(Self {
            name: name.to_string(),
            radius,
            orbit_radius,
            parent_star: parent_star.clone(),
            moons: Vec::new(),
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

    /// The parent star as it was when this planet was constructed.
    pub fn parent_star(&self) -> &Star {
        &self.parent_star
    }

    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    /// Look up a moon by exact name.
    pub fn moon_by_name(&self, name: &str) -> Option<&Moon> {
        self.moons.iter().find(|moon| moon.name() == name)
    }

    /// Append a moon, rejecting duplicate names (case-sensitive).
    pub fn add_moon(&mut self, moon: Moon) -> Result<(), CatalogError> {
        if self.moons.iter().any(|existing| existing.name() == moon.name()) {
            return Err(CatalogError::DuplicateMoon(moon.name().to_string()));
        }
        self.moons.push(moon);
        Ok(())
    }

    /// Remove a moon by value; membership is by name, which is unique here.
    pub fn remove_moon(&mut self, moon: &Moon) -> Result<(), CatalogError> {
        self.remove_moon_by_name(moon.name())
    }

    /// Remove the moon with the given name.
    pub fn remove_moon_by_name(&mut self, name: &str) -> Result<(), CatalogError> {
        let index = self
            .moons
            .iter()
            .position(|moon| moon.name() == name)
            .ok_or_else(|| CatalogError::MoonNotFound(name.to_string()))?;
        self.moons.remove(index);
        Ok(())
    }

    /// Stable in-place reorder of the moons by the supplied ordering.
    pub fn sort_moons<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Moon, &Moon) -> Ordering,
    {
        self.moons.sort_by(|a, b| compare(a, b));
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.radius, self.orbit_radius)
    }
}

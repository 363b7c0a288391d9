use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::planet::{
    MIN_PLANET_RADIUS, PLANET_ORBIT_MAX_FACTOR, PLANET_ORBIT_MIN_FACTOR, PLANET_RADIUS_DIVISOR,
};
use super::{CatalogError, Moon, Planet, SolarSystem, Star, ordering};
use crate::codec;

/// Registry of named solar systems with at most one "current" selection.
///
/// Systems are keyed by star name; names are globally unique. Iteration is
/// name-ordered, so listings are deterministic. The catalog is a plain
/// context object: build as many independent ones as you need.
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    systems: BTreeMap<String, SolarSystem>,
    current: Option<String>,
}

impl Catalog {
    /// Create an empty catalog with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a star and register a new system around it.
    ///
    /// Fails on a radius at or below 20000 km or on a name collision.
    pub fn create_solar_system(
        &mut self,
        star_name: &str,
        star_radius: f64,
    ) -> Result<(), CatalogError> {
        if self.systems.contains_key(star_name) {
            return Err(CatalogError::DuplicateSystem(star_name.to_string()));
        }
        let star = Star::new(star_name, star_radius)?;
        self.systems.insert(star_name.to_string(), SolarSystem::new(star));
        Ok(())
    }

    /// Register an already-built system, rejecting name collisions.
    pub fn add_solar_system(&mut self, system: SolarSystem) -> Result<(), CatalogError> {
        if self.systems.contains_key(system.name()) {
            return Err(CatalogError::DuplicateSystem(system.name().to_string()));
        }
        self.systems.insert(system.name().to_string(), system);
        Ok(())
    }

    /// Make the named system current. Returns whether the selection
    /// succeeded; a failed selection leaves the prior one in place.
    pub fn select_solar_system(&mut self, name: &str) -> bool {
        if self.systems.contains_key(name) {
            self.current = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// The currently selected system, if any.
    pub fn current(&self) -> Option<&SolarSystem> {
        self.current.as_deref().and_then(|name| self.systems.get(name))
    }

    /// Look up a system by name.
    pub fn solar_system(&self, name: &str) -> Option<&SolarSystem> {
        self.systems.get(name)
    }

    /// All registered systems, in name order.
    pub fn systems(&self) -> impl Iterator<Item = &SolarSystem> {
        self.systems.values()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Add a planet to the named system from free-text numeric fields.
    ///
    /// Blank names, an unknown system, unparsable numbers, out-of-band
    /// values, and duplicate planet names are all distinct failures. The
    /// radius band is `(1000, star_radius/10)` exclusive; the orbit band is
    /// `[star_radius*10, star_radius*20]` inclusive.
    pub fn add_planet(
        &mut self,
        system_name: &str,
        planet_name: &str,
        radius_text: &str,
        orbit_radius_text: &str,
    ) -> Result<(), CatalogError> {
        if system_name.trim().is_empty() {
            return Err(CatalogError::NameRequired { what: "solar system" });
        }
        if planet_name.trim().is_empty() {
            return Err(CatalogError::NameRequired { what: "planet" });
        }
        let system = self
            .systems
            .get_mut(system_name)
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;
        let star = system
            .star()
            .cloned()
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;

        let radius = parse_number(radius_text, "radius")?;
        let orbit_radius = parse_number(orbit_radius_text, "orbit radius")?;

        let max_radius = star.radius() / PLANET_RADIUS_DIVISOR;
        if radius <= MIN_PLANET_RADIUS || radius >= max_radius {
            return Err(CatalogError::PlanetRadiusOutOfBand { radius, max: max_radius });
        }
        let min_orbit = star.radius() * PLANET_ORBIT_MIN_FACTOR;
        let max_orbit = star.radius() * PLANET_ORBIT_MAX_FACTOR;
        if orbit_radius < min_orbit || orbit_radius > max_orbit {
            return Err(CatalogError::PlanetOrbitOutOfBand {
                orbit_radius,
                min: min_orbit,
                max: max_orbit,
            });
        }
        if system.planet_by_name(planet_name).is_some() {
            return Err(CatalogError::DuplicatePlanet(planet_name.to_string()));
        }

        let planet = Planet::new(planet_name, radius, orbit_radius, &star)?;
        system.add_planet(planet)
    }

    /// Add a moon to the named planet of the named system.
    ///
    /// System and planet resolution each fail distinctly. The radius band
    /// is `(10, planet_radius/17)` exclusive; the orbit floor is
    /// `planet_radius*5`.
    pub fn add_moon(
        &mut self,
        system_name: &str,
        planet_name: &str,
        moon_name: &str,
        radius: f64,
        orbit_radius: f64,
    ) -> Result<(), CatalogError> {
        let system = self
            .systems
            .get_mut(system_name)
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;
        let planet = system
            .planet_by_name_mut(planet_name)
            .ok_or_else(|| CatalogError::PlanetNotFound(planet_name.to_string()))?;

        let moon = Moon::new(moon_name, radius, orbit_radius, planet)?;
        planet.add_moon(moon)
    }

    /// Remove the named planet from the named system.
    pub fn remove_planet(
        &mut self,
        system_name: &str,
        planet_name: &str,
    ) -> Result<(), CatalogError> {
        let system = self
            .systems
            .get_mut(system_name)
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;
        system.remove_planet_by_name(planet_name)
    }

    /// Remove the named moon; every link in the chain fails distinctly.
    pub fn remove_moon(
        &mut self,
        system_name: &str,
        planet_name: &str,
        moon_name: &str,
    ) -> Result<(), CatalogError> {
        let system = self
            .systems
            .get_mut(system_name)
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;
        let planet = system
            .planet_by_name_mut(planet_name)
            .ok_or_else(|| CatalogError::PlanetNotFound(planet_name.to_string()))?;
        planet.remove_moon_by_name(moon_name)
    }

    /// Decapitate the current system: drop its planets and its star.
    pub fn remove_star(&mut self) -> Result<(), CatalogError> {
        let name = self.current.clone().ok_or(CatalogError::NoSystemSelected)?;
        let system = self
            .systems
            .get_mut(&name)
            .ok_or_else(|| CatalogError::SystemNotFound(name.clone()))?;
        system.clear_star();
        Ok(())
    }

    /// Read-only view of the current system's planets, ascending by radius.
    pub fn planets_by_radius(&self) -> Result<Vec<Planet>, CatalogError> {
        self.sorted_current_planets(ordering::by_radius)
    }

    /// Read-only view of the current system's planets, ascending by orbit
    /// radius.
    pub fn planets_by_orbit_radius(&self) -> Result<Vec<Planet>, CatalogError> {
        self.sorted_current_planets(ordering::by_orbit_radius)
    }

    fn sorted_current_planets<F>(&self, compare: F) -> Result<Vec<Planet>, CatalogError>
    where
        F: FnMut(&Planet, &Planet) -> Ordering,
    {
        let system = self.current().ok_or(CatalogError::NoSystemSelected)?;
        let mut planets = system.planets().to_vec();
        planets.sort_by(compare);
        Ok(planets)
    }

    /// Sort the named system's planets and moons with the supplied orders.
    pub fn sort_solar_system<P, M>(
        &mut self,
        system_name: &str,
        planet_compare: P,
        moon_compare: M,
    ) -> Result<(), CatalogError>
    where
        P: FnMut(&Planet, &Planet) -> Ordering,
        M: FnMut(&Moon, &Moon) -> Ordering,
    {
        let system = self
            .systems
            .get_mut(system_name)
            .ok_or_else(|| CatalogError::SystemNotFound(system_name.to_string()))?;
        system.sort_planets_and_moons(planet_compare, moon_compare);
        Ok(())
    }

    /// Bulk-populate from the line-oriented text format.
    ///
    /// Systems committed before a failing line stay registered; there is
    /// no rollback.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), CatalogError> {
        codec::decode_into(self, text)
    }

    /// Bulk-populate from a catalog file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CatalogError> {
        let text = fs::read_to_string(path)?;
        self.load_from_str(&text)
    }
}

fn parse_number(text: &str, what: &'static str) -> Result<f64, CatalogError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CatalogError::InvalidNumber { what, input: text.to_string() })
}

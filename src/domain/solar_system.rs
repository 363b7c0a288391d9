use std::cmp::Ordering;

use serde::Serialize;

use super::{CatalogError, Moon, Planet, Star};

/// A solar system: one central star and an ordered collection of planets.
///
/// Planet names are unique within a system; planets keep insertion order
/// until explicitly sorted. The star may be removed (`clear_star`), leaving
/// a name-only husk; that is an intentional degraded state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarSystem {
    name: String,
    star: Option<Star>,
    planets: Vec<Planet>,
}

impl SolarSystem {
    /// Create a new system around a star, named after it.
    pub fn new(star: Star) -> Self {
        Self { name: star.name().to_string(), star: Some(star), planets: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The central star, or `None` after `clear_star`.
    pub fn star(&self) -> Option<&Star> {
        self.star.as_ref()
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Look up a planet by exact name; absence is a normal outcome.
    pub fn planet_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.name() == name)
    }

    pub fn planet_by_name_mut(&mut self, name: &str) -> Option<&mut Planet> {
        self.planets.iter_mut().find(|planet| planet.name() == name)
    }

    /// Append a planet, rejecting duplicate names (exact match).
    pub fn add_planet(&mut self, planet: Planet) -> Result<(), CatalogError> {
        if self.planets.iter().any(|existing| existing.name() == planet.name()) {
            return Err(CatalogError::DuplicatePlanet(planet.name().to_string()));
        }
        self.planets.push(planet);
        Ok(())
    }

    /// Remove a planet by value; membership is by name, which is unique here.
    pub fn remove_planet(&mut self, planet: &Planet) -> Result<(), CatalogError> {
        self.remove_planet_by_name(planet.name())
    }

    /// Remove the planet with the given name.
    pub fn remove_planet_by_name(&mut self, name: &str) -> Result<(), CatalogError> {
        let index = self
            .planets
            .iter()
            .position(|planet| planet.name() == name)
            .ok_or_else(|| CatalogError::PlanetNotFound(name.to_string()))?;
        self.planets.remove(index);
        Ok(())
    }

    /// Sort the planets in place, then each planet's moons in the planets'
    /// new order. Both sorts are stable.
    pub fn sort_planets_and_moons<P, M>(&mut self, mut planet_compare: P, mut moon_compare: M)
    where
        P: FnMut(&Planet, &Planet) -> Ordering,
        M: FnMut(&Moon, &Moon) -> Ordering,
    {
        self.planets.sort_by(|a, b| planet_compare(a, b));
        for planet in &mut self.planets {
            planet.sort_moons(&mut moon_compare);
        }
    }

    /// Decapitate the system: drop every planet and the star itself.
    /// Irreversible; the system keeps only its name.
    pub fn clear_star(&mut self) {
        self.planets.clear();
        self.star = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{by_orbit_radius, by_radius};

    fn system() -> SolarSystem {
        SolarSystem::new(Star::new("Sol", 696_000.0).unwrap())
    }

    fn planet(system: &SolarSystem, name: &str, radius: f64, orbit: f64) -> Planet {
        Planet::new(name, radius, orbit, system.star().unwrap()).unwrap()
    }

    #[test]
    fn system_takes_the_star_name() {
        let system = system();
        assert_eq!(system.name(), "Sol");
        assert!(system.star().is_some());
    }

    #[test]
    fn duplicate_planet_name_is_rejected() {
        let mut system = system();
        system.add_planet(planet(&system, "Earth", 6371.0, 7_000_000.0)).unwrap();
        let err = system.add_planet(planet(&system, "Earth", 3390.0, 7_100_000.0)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicatePlanet(name) if name == "Earth"));
        assert_eq!(system.planets().len(), 1);
    }

    #[test]
    fn planet_lookup_distinguishes_absence_from_error() {
        let mut system = system();
        system.add_planet(planet(&system, "Earth", 6371.0, 7_000_000.0)).unwrap();
        assert!(system.planet_by_name("Earth").is_some());
        assert!(system.planet_by_name("Vulcan").is_none());
    }

    #[test]
    fn remove_planet_not_a_member() {
        let mut system = system();
        let orphan = planet(&system, "Earth", 6371.0, 7_000_000.0);
        let err = system.remove_planet(&orphan).unwrap_err();
        assert!(matches!(err, CatalogError::PlanetNotFound(_)));
    }

    #[test]
    fn sort_orders_planets_then_their_moons() {
        let mut system = system();
        let mut mars = planet(&system, "Mars", 3390.0, 8_000_000.0);
        mars.add_moon(Moon::new("Deimos", 12.0, 23_460.0, &mars).unwrap()).unwrap();
        mars.add_moon(Moon::new("Phobos", 11.0, 17_000.0, &mars).unwrap()).unwrap();
        let earth = planet(&system, "Earth", 6371.0, 7_000_000.0);
        system.add_planet(mars).unwrap();
        system.add_planet(earth).unwrap();

        system.sort_planets_and_moons(by_radius, by_orbit_radius);

        let names: Vec<_> = system.planets().iter().map(Planet::name).collect();
        assert_eq!(names, ["Mars", "Earth"]);
        let moons: Vec<_> = system.planets()[0].moons().iter().map(Moon::name).collect();
        assert_eq!(moons, ["Phobos", "Deimos"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut system = system();
        system.add_planet(planet(&system, "Mars", 3390.0, 8_000_000.0)).unwrap();
        system.add_planet(planet(&system, "Earth", 6371.0, 7_000_000.0)).unwrap();

        system.sort_planets_and_moons(by_radius, by_radius);
        let once = system.clone();
        system.sort_planets_and_moons(by_radius, by_radius);
        assert_eq!(system, once);
    }

    #[test]
    fn clear_star_leaves_a_named_husk() {
        let mut system = system();
        system.add_planet(planet(&system, "Earth", 6371.0, 7_000_000.0)).unwrap();
        system.clear_star();
        assert!(system.star().is_none());
        assert!(system.planets().is_empty());
        assert_eq!(system.name(), "Sol");
    }
}

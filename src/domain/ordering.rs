use std::cmp::Ordering;

use super::{Moon, Planet};

/// Common surface of bodies that orbit a parent: planets around a star,
/// moons around a planet. Comparators are written once against this trait.
pub trait OrbitalBody {
    fn radius(&self) -> f64;
    fn orbit_radius(&self) -> f64;
}

impl OrbitalBody for Planet {
    fn radius(&self) -> f64 {
        Planet::radius(self)
    }

    fn orbit_radius(&self) -> f64 {
        Planet::orbit_radius(self)
    }
}

impl OrbitalBody for Moon {
    fn radius(&self) -> f64 {
        Moon::radius(self)
    }

    fn orbit_radius(&self) -> f64 {
        Moon::orbit_radius(self)
    }
}

/// Ascending by body radius.
pub fn by_radius<T: OrbitalBody>(a: &T, b: &T) -> Ordering {
    a.radius().total_cmp(&b.radius())
}

/// Ascending by orbit radius.
pub fn by_orbit_radius<T: OrbitalBody>(a: &T, b: &T) -> Ordering {
    a.orbit_radius().total_cmp(&b.orbit_radius())
}

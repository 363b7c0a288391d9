//! orrery: a catalog of solar systems with validated star/planet/moon
//! hierarchy and a line-oriented text codec.
//!
//! The [`domain`] module holds the model: leaf value types ([`Star`],
//! [`Moon`]), the [`Planet`] entity with its moon collection, the
//! [`SolarSystem`] aggregate, and the [`Catalog`] registry that the
//! presentation layer drives. The [`codec`] module converts systems
//! to and from the indentation-depth text format.

pub mod codec;
pub mod domain;

use std::path::Path;

pub use codec::{encode_catalog, encode_system};
pub use domain::{
    Catalog, CatalogError, FailureCategory, Moon, Planet, PlanetSnapshot, SolarSystem, Star,
    ordering,
};

/// Load a catalog file into a fresh catalog.
///
/// On error the partially-loaded catalog is discarded; call
/// [`Catalog::load_from_file`] on an existing catalog to keep the systems
/// committed before the failing line.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    catalog.load_from_file(path)?;
    Ok(catalog)
}

pub mod catalog;
pub mod error;
pub mod moon;
pub mod ordering;
pub mod planet;
pub mod solar_system;
pub mod star;

pub use catalog::Catalog;
pub use error::{CatalogError, FailureCategory};
pub use moon::{Moon, PlanetSnapshot};
pub use planet::Planet;
pub use solar_system::SolarSystem;
pub use star::Star;

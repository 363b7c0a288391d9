//! Line-oriented text codec for the catalog hierarchy.
//!
//! One record per line; depth is the count of leading `-` markers:
//!
//! ```text
//! Sol:696000
//! -Earth:6371:7000000
//! --Luna:173:384400
//! ```
//!
//! Depth 0 opens a solar system, depth 1 adds a planet to the most recent
//! system, depth 2 adds a moon to the most recent planet. Fields are
//! colon-separated; radii parse as `f64`.

use crate::domain::{Catalog, CatalogError, Moon, Planet, SolarSystem, Star};

/// Decoder position within the hierarchy.
///
/// A planet record is only meaningful inside a system, and a moon record
/// only inside a planet. Records that arrive before their anchor are
/// skipped rather than rejected, so a truncated or hand-edited file
/// degrades instead of failing outright.
///
/// The anchor star is carried alongside the open system: a decoded system
/// always has one (only the post-load decapitate operation can take it
/// away), and keeping it here lets planet records validate against it
/// without re-checking.
enum DecodeState {
    AwaitingSystem,
    InSystem(Star, SolarSystem),
    InPlanet(Star, SolarSystem, Planet),
}

impl DecodeState {
    /// Fold the finished planet back into its system, if one is open.
    fn close_planet(self) -> Result<Self, CatalogError> {
        match self {
            DecodeState::InPlanet(star, mut system, planet) => {
                system.add_planet(planet)?;
                Ok(DecodeState::InSystem(star, system))
            }
            other => Ok(other),
        }
    }

    /// Flush whatever is open into the catalog.
    fn commit(self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        match self.close_planet()? {
            DecodeState::InSystem(_, system) => catalog.add_solar_system(system),
            _ => Ok(()),
        }
    }
}

/// Decode the text format into the catalog.
///
/// Systems committed before a failing line stay in the catalog; there is
/// no rollback. Blank lines are skipped, as are planet/moon records with
/// no preceding anchor.
pub fn decode_into(catalog: &mut Catalog, text: &str) -> Result<(), CatalogError> {
    let mut state = DecodeState::AwaitingSystem;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let depth = line.chars().take_while(|c| *c == '-').count();
        let body = &line[depth..];

        match depth {
            0 => {
                let (name, radius) = split_record(body, 2, line_no)?;
                state.commit(catalog)?;
                let star = Star::new(name, radius[0])?;
                let system = SolarSystem::new(star.clone());
                state = DecodeState::InSystem(star, system);
            }
            1 => match state.close_planet()? {
                DecodeState::InSystem(star, system) => {
                    let (name, fields) = split_record(body, 3, line_no)?;
                    let planet = Planet::new(name, fields[0], fields[1], &star)?;
                    state = DecodeState::InPlanet(star, system, planet);
                }
                // No open system to anchor on; skip the record.
                other => state = other,
            },
            2 => match state {
                DecodeState::InPlanet(star, system, mut planet) => {
                    let (name, fields) = split_record(body, 3, line_no)?;
                    let moon = Moon::new(name, fields[0], fields[1], &planet)?;
                    planet.add_moon(moon)?;
                    state = DecodeState::InPlanet(star, system, planet);
                }
                // No open planet to anchor on; skip the record.
                other => state = other,
            },
            _ => {
                return Err(CatalogError::MalformedRecord {
                    line: line_no,
                    reason: format!("unsupported depth {depth}"),
                });
            }
        }
    }

    state.commit(catalog)
}

/// Split `name:field...`, expecting `parts` colon-separated fields in
/// total, and parse everything after the name as `f64`.
fn split_record(
    body: &str,
    parts: usize,
    line_no: usize,
) -> Result<(&str, Vec<f64>), CatalogError> {
    let fields: Vec<&str> = body.split(':').collect();
    if fields.len() != parts {
        return Err(CatalogError::MalformedRecord {
            line: line_no,
            reason: format!("expected {parts} fields, found {}", fields.len()),
        });
    }
    let mut numbers = Vec::with_capacity(parts - 1);
    for field in &fields[1..] {
        let value = field.trim().parse::<f64>().map_err(|_| CatalogError::MalformedRecord {
            line: line_no,
            reason: format!("'{field}' is not a number"),
        })?;
        numbers.push(value);
    }
    Ok((fields[0], numbers))
}

/// Encode one system in the text format, the exact inverse of decoding.
///
/// A decapitated system has no depth-0 record to anchor on and encodes to
/// nothing.
pub fn encode_system(system: &SolarSystem) -> String {
    let Some(star) = system.star() else {
        return String::new();
    };
    let mut out = String::new();
    out.push_str(&format!("{star}\n"));
    for planet in system.planets() {
        out.push_str(&format!("-{planet}\n"));
        for moon in planet.moons() {
            out.push_str(&format!("--{moon}\n"));
        }
    }
    out
}

/// Encode every system in the catalog, in listing order.
pub fn encode_catalog(catalog: &Catalog) -> String {
    catalog.systems().map(encode_system).collect()
}

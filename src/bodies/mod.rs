//! Body registry: the static tree of the Sun, planets, their moons and the
//! major main-belt asteroids.
//!
//! Top-level entries orbit the origin (where the Sun sits); moons orbit their
//! owning planet. Ownership is a strict tree built from `&'static` slices, so
//! traversal never needs cycle detection.

mod data;

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use data::BODIES;

/// Error returned when a string does not name any body in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown celestial body id: {0:?}")]
pub struct BodyIdError(pub String);

/// Identifier for every body the simulation knows about.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    // Moons
    Moon,
    Phobos,
    Deimos,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Titan,
    Enceladus,
    Mimas,
    Iapetus,
    Titania,
    Oberon,
    Ariel,
    Umbriel,
    Miranda,
    Triton,
    // Main belt
    Ceres,
    Vesta,
    Pallas,
    Hygiea,
}

impl BodyId {
    /// Every id, in registry order.
    pub const ALL: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Moon,
        BodyId::Phobos,
        BodyId::Deimos,
        BodyId::Io,
        BodyId::Europa,
        BodyId::Ganymede,
        BodyId::Callisto,
        BodyId::Titan,
        BodyId::Enceladus,
        BodyId::Mimas,
        BodyId::Iapetus,
        BodyId::Titania,
        BodyId::Oberon,
        BodyId::Ariel,
        BodyId::Umbriel,
        BodyId::Miranda,
        BodyId::Triton,
        BodyId::Ceres,
        BodyId::Vesta,
        BodyId::Pallas,
        BodyId::Hygiea,
    ];

    /// Stable lowercase identifier, also used for texture paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyId::Sun => "sun",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
            BodyId::Moon => "moon",
            BodyId::Phobos => "phobos",
            BodyId::Deimos => "deimos",
            BodyId::Io => "io",
            BodyId::Europa => "europa",
            BodyId::Ganymede => "ganymede",
            BodyId::Callisto => "callisto",
            BodyId::Titan => "titan",
            BodyId::Enceladus => "enceladus",
            BodyId::Mimas => "mimas",
            BodyId::Iapetus => "iapetus",
            BodyId::Titania => "titania",
            BodyId::Oberon => "oberon",
            BodyId::Ariel => "ariel",
            BodyId::Umbriel => "umbriel",
            BodyId::Miranda => "miranda",
            BodyId::Triton => "triton",
            BodyId::Ceres => "ceres",
            BodyId::Vesta => "vesta",
            BodyId::Pallas => "pallas",
            BodyId::Hygiea => "hygiea",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyId {
    type Err = BodyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BodyId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BodyIdError(s.to_string()))
    }
}

/// Broad classification of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    DwarfPlanet,
    Asteroid,
}

impl BodyKind {
    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::Moon => "moon",
            BodyKind::DwarfPlanet => "dwarf planet",
            BodyKind::Asteroid => "asteroid",
        }
    }
}

/// Orbit around the parent. Distance and period travel together, so a body
/// either has both or neither.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Mean distance from the Sun in AU. Moons carry their planet's value.
    pub distance_au: f64,
    /// Orbital period in Earth days. Negative means a retrograde orbit.
    pub period_days: f64,
}

/// Temperatures in degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Temperature {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    /// Gas name and volume percentage.
    pub composition: &'static [(&'static str, f64)],
    /// Surface pressure relative to Earth's.
    pub pressure_atm: f64,
    pub temperature: Temperature,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Discovery {
    pub by: &'static str,
    pub date: &'static str,
    pub method: &'static str,
}

/// Immutable record for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBodyData {
    pub id: BodyId,
    pub name: &'static str,
    pub kind: BodyKind,
    /// Mean radius in km.
    pub radius_km: f64,
    /// Mass in kg.
    pub mass_kg: f64,
    /// Density in g/cm³.
    pub density: f64,
    /// Surface gravity in m/s².
    pub gravity: f64,
    /// Escape velocity in km/s.
    pub escape_velocity: f64,
    pub orbit: Option<Orbit>,
    /// Sidereal rotation period in hours. Negative means retrograde spin.
    pub rotation_period_hours: f64,
    pub axial_tilt_deg: f64,
    pub eccentricity: Option<f64>,
    pub atmosphere: Option<Atmosphere>,
    pub description: &'static str,
    pub key_facts: &'static [&'static str],
    pub fun_facts: &'static [&'static str],
    pub discovery: Discovery,
    pub earth_comparison: &'static str,
    pub images: &'static [&'static str],
    pub video: &'static str,
    pub has_rings: bool,
    pub moons: &'static [CelestialBodyData],
}

impl CelestialBodyData {
    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Orbital period in days, if the body orbits anything.
    pub fn orbital_period_days(&self) -> Option<f64> {
        self.orbit.map(|o| o.period_days)
    }

    pub fn distance_au(&self) -> Option<f64> {
        self.orbit.map(|o| o.distance_au)
    }
}

/// One step of a pre-order registry walk.
#[derive(Clone, Copy, Debug)]
pub struct BodyVisit {
    pub body: &'static CelestialBodyData,
    pub parent: Option<&'static CelestialBodyData>,
    /// Position within the parent's moon list (or within the top level).
    pub index: usize,
}

/// Result of a name search over the registry.
#[derive(Debug, Default)]
pub struct SearchResults {
    /// Matching top-level bodies, in registry order.
    pub bodies: Vec<&'static CelestialBodyData>,
    /// Matching moons paired with their planet.
    pub moons: Vec<(&'static CelestialBodyData, &'static CelestialBodyData)>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty() && self.moons.is_empty()
    }
}

/// The registry resource. Cheap to copy; all data is `'static`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SolarSystem {
    roots: &'static [CelestialBodyData],
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self { roots: BODIES }
    }
}

impl SolarSystem {
    /// Bodies that orbit the origin directly.
    pub fn top_level(&self) -> &'static [CelestialBodyData] {
        self.roots
    }

    /// Depth-first lookup through the whole tree.
    pub fn find(&self, id: BodyId) -> Option<&'static CelestialBodyData> {
        fn search(
            bodies: &'static [CelestialBodyData],
            id: BodyId,
        ) -> Option<&'static CelestialBodyData> {
            for body in bodies {
                if body.id == id {
                    return Some(body);
                }
                if let Some(found) = search(body.moons, id) {
                    return Some(found);
                }
            }
            None
        }
        search(self.roots, id)
    }

    /// Lookup by string id such as `"moon"`.
    pub fn find_str(&self, id: &str) -> Option<&'static CelestialBodyData> {
        id.parse::<BodyId>().ok().and_then(|id| self.find(id))
    }

    /// The body that owns `id` in its moon list. Top-level bodies have none.
    pub fn parent_of(&self, id: BodyId) -> Option<&'static CelestialBodyData> {
        self.walk()
            .find(|visit| visit.body.id == id)
            .and_then(|visit| visit.parent)
    }

    /// Pre-order walk: every parent is yielded before its moons.
    pub fn walk(&self) -> std::vec::IntoIter<BodyVisit> {
        fn visit(
            bodies: &'static [CelestialBodyData],
            parent: Option<&'static CelestialBodyData>,
            out: &mut Vec<BodyVisit>,
        ) {
            for (index, body) in bodies.iter().enumerate() {
                out.push(BodyVisit {
                    body,
                    parent,
                    index,
                });
                visit(body.moons, Some(body), out);
            }
        }

        let mut out = Vec::with_capacity(BodyId::ALL.len());
        visit(self.roots, None, &mut out);
        out.into_iter()
    }

    /// Case-insensitive substring search over display names.
    ///
    /// A moon is listed when its own name matches or when its planet matches.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> SearchResults {
        let needle = term.trim().to_lowercase();
        let matches = |name: &str| name.to_lowercase().contains(&needle);

        let mut results = SearchResults::default();
        for body in self.roots {
            let parent_matches = matches(body.name);
            if parent_matches {
                results.bodies.push(body);
            }
            for moon in body.moons {
                if parent_matches || matches(moon.name) {
                    results.moons.push((moon, body));
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_exactly_once() {
        let system = SolarSystem::default();
        for id in BodyId::ALL {
            let count = system.walk().filter(|v| v.body.id == *id).count();
            assert_eq!(count, 1, "{id} should appear once in the tree");
        }
    }

    #[test]
    fn moon_resolves_to_the_nested_moon_not_earth() {
        let system = SolarSystem::default();
        let moon = system.find_str("moon").expect("moon should exist");
        assert_eq!(moon.id, BodyId::Moon);
        assert_eq!(moon.name, "The Moon");
        assert_eq!(moon.kind, BodyKind::Moon);

        let parent = system.parent_of(BodyId::Moon).expect("moon has a parent");
        assert_eq!(parent.id, BodyId::Earth);
        assert_ne!(moon.id, parent.id);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "vulcan".parse::<BodyId>().unwrap_err();
        assert_eq!(err, BodyIdError("vulcan".to_string()));
        assert!(SolarSystem::default().find_str("vulcan").is_none());
    }

    #[test]
    fn id_parsing_ignores_case() {
        assert_eq!("Titan".parse::<BodyId>(), Ok(BodyId::Titan));
        assert_eq!(BodyId::Titan.to_string(), "titan");
    }

    #[test]
    fn walk_visits_parents_before_children() {
        let system = SolarSystem::default();
        let order: Vec<BodyId> = system.walk().map(|v| v.body.id).collect();
        for visit in system.walk() {
            if let Some(parent) = visit.parent {
                let parent_pos = order.iter().position(|id| *id == parent.id).unwrap();
                let child_pos = order.iter().position(|id| *id == visit.body.id).unwrap();
                assert!(parent_pos < child_pos);
            }
        }
    }

    #[test]
    fn moon_indices_follow_parent_order() {
        let system = SolarSystem::default();
        let jupiter_moons: Vec<(BodyId, usize)> = system
            .walk()
            .filter(|v| v.parent.map(|p| p.id) == Some(BodyId::Jupiter))
            .map(|v| (v.body.id, v.index))
            .collect();
        assert_eq!(
            jupiter_moons,
            vec![
                (BodyId::Io, 0),
                (BodyId::Europa, 1),
                (BodyId::Ganymede, 2),
                (BodyId::Callisto, 3)
            ]
        );
    }

    #[test]
    fn orbit_fields_come_as_a_pair() {
        let system = SolarSystem::default();
        let sun = system.find(BodyId::Sun).unwrap();
        assert!(sun.orbit.is_none());
        assert!(sun.is_star());
        for visit in system.walk().filter(|v| !v.body.is_star()) {
            assert!(visit.body.orbit.is_some(), "{} should orbit", visit.body.id);
        }
    }

    #[test]
    fn retrograde_bodies_are_signed() {
        let system = SolarSystem::default();
        assert!(system.find(BodyId::Venus).unwrap().rotation_period_hours < 0.0);
        assert!(system.find(BodyId::Uranus).unwrap().rotation_period_hours < 0.0);
        let triton = system.find(BodyId::Triton).unwrap();
        assert!(triton.orbital_period_days().unwrap() < 0.0);
    }

    #[test]
    fn search_is_case_insensitive() {
        let results = SolarSystem::default().search("SAT");
        let ids: Vec<BodyId> = results.bodies.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BodyId::Saturn]);
        // Saturn's moons come along with their planet
        assert_eq!(results.moons.len(), 4);
        assert!(results.moons.iter().all(|(_, p)| p.id == BodyId::Saturn));
    }

    #[test]
    fn search_finds_moons_by_their_own_name() {
        let results = SolarSystem::default().search("europa");
        assert!(results.bodies.is_empty());
        assert_eq!(results.moons.len(), 1);
        assert_eq!(results.moons[0].0.id, BodyId::Europa);
        assert_eq!(results.moons[0].1.id, BodyId::Jupiter);
    }

    #[test]
    fn empty_search_lists_everything() {
        let system = SolarSystem::default();
        let results = system.search("  ");
        assert_eq!(results.bodies.len(), system.top_level().len());
        assert_eq!(
            results.bodies.len() + results.moons.len(),
            BodyId::ALL.len()
        );
    }

    #[test]
    fn search_without_hits_is_empty() {
        assert!(SolarSystem::default().search("xyzzy").is_empty());
    }
}

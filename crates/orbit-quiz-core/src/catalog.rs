//! Static catalog of the bodies the learner has to name.
//!
//! Catalog order is meaningful: it fixes each body's orbital phase offset and
//! the order labels are created in.

use crate::constants::DEFAULT_LABEL_OFFSET_PX;

/// Index of a body inside its [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub key: String,
    pub name: String,
    /// 0xRRGGBB
    pub color: u32,
    pub render_radius: f32,
    pub orbit_radius: f32,
    pub base_speed: f32,
    pub speed_factor: f32,
    /// Pixels the label is raised above the body's screen anchor.
    pub label_offset: f32,
}

impl CelestialBody {
    pub fn new(
        key: &str,
        name: &str,
        color: u32,
        render_radius: f32,
        orbit_radius: f32,
        base_speed: f32,
        speed_factor: f32,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            color,
            render_radius,
            orbit_radius,
            base_speed,
            speed_factor,
            label_offset: DEFAULT_LABEL_OFFSET_PX,
        }
    }

    pub fn with_label_offset(mut self, label_offset: f32) -> Self {
        self.label_offset = label_offset;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
}

impl Catalog {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    /// The nine bodies of the solar system activity, innermost first.
    pub fn solar_system() -> Self {
        Self::new(vec![
            CelestialBody::new("mercurio", "Mercurio", 0xb5b5b5, 0.020, 0.06, 1.45, 1.30)
                .with_label_offset(30.0),
            CelestialBody::new("venus", "Venus", 0xd4a96a, 0.024, 0.10, 1.20, 1.18)
                .with_label_offset(34.0),
            CelestialBody::new("tierra", "Tierra", 0x3a8ef6, 0.026, 0.14, 1.05, 1.05)
                .with_label_offset(38.0),
            CelestialBody::new("marte", "Marte", 0xcf664f, 0.022, 0.18, 0.91, 0.94)
                .with_label_offset(34.0),
            CelestialBody::new("jupiter", "Jupiter", 0xd7a986, 0.052, 0.26, 0.68, 0.78)
                .with_label_offset(44.0),
            CelestialBody::new("saturno", "Saturno", 0xd4bf8c, 0.046, 0.33, 0.53, 0.66)
                .with_label_offset(42.0),
            CelestialBody::new("urano", "Urano", 0x88c0c7, 0.034, 0.40, 0.42, 0.53)
                .with_label_offset(38.0),
            CelestialBody::new("neptuno", "Neptuno", 0x4c6fd8, 0.033, 0.46, 0.37, 0.49)
                .with_label_offset(38.0),
            CelestialBody::new("pluton", "Pluton", 0xba9885, 0.015, 0.52, 0.29, 0.44)
                .with_label_offset(30.0),
        ])
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn ids(&self) -> Vec<BodyId> {
        (0..self.bodies.len()).map(BodyId).collect()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn index_of(&self, key: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.key == key).map(BodyId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }
}

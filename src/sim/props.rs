//! Static prop registry
//!
//! Props are immovable beach decorations that double as circular obstacles.
//! The registry is filled once by terrain generation and read-only afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PROPS_RADIUS;

/// Visual variant of a prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    BeachChair,
    SandCastle,
    Umbrella,
    SwimRing,
}

impl PropKind {
    pub const ALL: [PropKind; 4] = [
        PropKind::BeachChair,
        PropKind::SandCastle,
        PropKind::Umbrella,
        PropKind::SwimRing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropKind::BeachChair => "beach_chair",
            PropKind::SandCastle => "sand_castle",
            PropKind::Umbrella => "umbrella",
            PropKind::SwimRing => "ring",
        }
    }
}

/// A single obstacle. All props share `PROPS_RADIUS`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticProp {
    pub center: Vec2,
    pub kind: PropKind,
    /// Drawn horizontally flipped
    pub mirrored: bool,
}

impl StaticProp {
    pub fn new(center: Vec2, kind: PropKind, mirrored: bool) -> Self {
        Self {
            center,
            kind,
            mirrored,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        PROPS_RADIUS
    }
}

/// Owned list of every prop in the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropRegistry {
    props: Vec<StaticProp>,
}

impl PropRegistry {
    pub fn new() -> Self {
        Self { props: Vec::new() }
    }

    /// Register a prop (generation time only)
    pub fn register(&mut self, prop: StaticProp) {
        self.props.push(prop);
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaticProp> {
        self.props.iter()
    }

    pub fn as_slice(&self) -> &[StaticProp] {
        &self.props
    }
}

impl FromIterator<StaticProp> for PropRegistry {
    fn from_iter<I: IntoIterator<Item = StaticProp>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

//! Procedural beach terrain
//!
//! A handful of random "land spots" are picked on the grid, then every cell is
//! scored by its summed Manhattan distance to all of them. Cells scoring above
//! the threshold become sand, the rest water. Sand cells occasionally get a
//! prop, which is registered as a static collider.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::props::{PropKind, PropRegistry, StaticProp};
use crate::consts::*;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of this cell in world space
    pub fn to_world(self) -> Vec2 {
        Vec2::new(self.x as f32 * TILE_WIDTH, self.y as f32 * TILE_HEIGHT)
    }

    /// Center of this cell in world space
    pub fn world_center(self) -> Vec2 {
        crate::center_of(self.to_world(), Vec2::new(TILE_WIDTH, TILE_HEIGHT))
    }

    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Tile surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Sand,
    Water,
}

/// One generated grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCell {
    pub grid_x: u32,
    pub grid_y: u32,
    pub is_land: bool,
}

impl TileCell {
    pub fn kind(&self) -> TileKind {
        if self.is_land {
            TileKind::Sand
        } else {
            TileKind::Water
        }
    }

    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.grid_x, self.grid_y)
    }
}

/// Generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub width: u32,
    pub height: u32,
    pub land_spot_count: usize,
    /// Cells must score strictly above this to be land
    pub land_threshold: u32,
    /// Probability that a land cell spawns a prop
    pub prop_chance: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: X_TILES,
            height: Y_TILES,
            land_spot_count: RANDOM_LAND_SPOTS_COUNT,
            land_threshold: MAX_TILE_SCORE_TO_BE_LAND,
            prop_chance: PROP_SPAWN_CHANCE,
        }
    }
}

/// Sum of Manhattan distances from `cell` to every land spot
pub fn tile_score(land_spots: &[GridPoint], cell: GridPoint) -> u32 {
    land_spots.iter().map(|spot| spot.manhattan(cell)).sum()
}

/// Land iff the score is strictly above the threshold
#[inline]
pub fn is_land(score: u32, threshold: u32) -> bool {
    score > threshold
}

/// Generated terrain: tiles (row-major), land spots and static props
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    pub width: u32,
    pub height: u32,
    pub land_spots: Vec<GridPoint>,
    pub tiles: Vec<TileCell>,
    pub props: PropRegistry,
}

impl Terrain {
    /// Pick random land spots, then build the grid
    pub fn generate<R: Rng>(config: &TerrainConfig, rng: &mut R) -> Self {
        let land_spots: Vec<GridPoint> = (0..config.land_spot_count)
            .map(|_| {
                GridPoint::new(
                    rng.random_range(0..config.width),
                    rng.random_range(0..config.height),
                )
            })
            .collect();
        Self::from_land_spots(config, land_spots, rng)
    }

    /// Build the grid from known land spots. The RNG is only used for props.
    pub fn from_land_spots<R: Rng>(
        config: &TerrainConfig,
        land_spots: Vec<GridPoint>,
        rng: &mut R,
    ) -> Self {
        let mut tiles = Vec::with_capacity((config.width * config.height) as usize);
        let mut props = PropRegistry::new();

        for y in 0..config.height {
            for x in 0..config.width {
                let cell = GridPoint::new(x, y);
                let land = is_land(tile_score(&land_spots, cell), config.land_threshold);
                tiles.push(TileCell {
                    grid_x: x,
                    grid_y: y,
                    is_land: land,
                });

                if land && rng.random_bool(config.prop_chance) {
                    let kind = PropKind::ALL[rng.random_range(0..PropKind::ALL.len())];
                    let mirrored = rng.random_bool(0.5);
                    props.register(StaticProp::new(cell.world_center(), kind, mirrored));
                }
            }
        }

        let terrain = Self {
            width: config.width,
            height: config.height,
            land_spots,
            tiles,
            props,
        };
        log::info!(
            "Terrain {}x{}: {} land tiles, {} props",
            terrain.width,
            terrain.height,
            terrain.land_count(),
            terrain.props.len()
        );
        terrain
    }

    pub fn tile(&self, x: u32, y: u32) -> Option<&TileCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize)
    }

    pub fn land_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_land).count()
    }

    /// World-space bounds (width, height)
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * TILE_WIDTH,
            self.height as f32 * TILE_HEIGHT,
        )
    }
}

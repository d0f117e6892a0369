use crate::state::Position;

/// Static map oracle exposing immutable layout information.
///
/// The oracle answers geometry questions only: bounds, terrain walkability,
/// and the location of the downstairs tile. Dynamic occupancy (actors,
/// ground items) is tracked by the entity registry in `GameState` and is not
/// the map's concern.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    fn tile(&self, position: Position) -> Option<StaticTile>;

    /// Location of the staircase leading to the next floor.
    fn downstairs_location(&self) -> Position;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Whether the terrain at `position` can be walked on. Out-of-bounds
    /// tiles are never walkable.
    fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_walkable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_walkable(self) -> bool {
        self.terrain.is_walkable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
    Void,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Concrete grid-backed map, row-major tile storage.
///
/// Generators build one of these per floor; the core consumes it through
/// [`MapOracle`] only.
#[derive(Clone, Debug)]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
    downstairs: Position,
}

impl GridMap {
    /// Creates a map of the given size filled with floor tiles and a wall
    /// border. The downstairs defaults to the origin until set.
    pub fn walled(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let edge = x == 0 || y == 0 || x == width as i32 - 1 || y == height as i32 - 1;
                let terrain = if edge {
                    TerrainKind::Wall
                } else {
                    TerrainKind::Floor
                };
                tiles.push(StaticTile::new(terrain));
            }
        }
        Self {
            dimensions,
            tiles,
            downstairs: Position::ORIGIN,
        }
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = StaticTile::new(terrain);
        }
    }

    pub fn set_downstairs(&mut self, position: Position) {
        self.downstairs = position;
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some((position.y * self.dimensions.width as i32 + position.x) as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position).map(|index| self.tiles[index])
    }

    fn downstairs_location(&self) -> Position {
        self.downstairs
    }
}

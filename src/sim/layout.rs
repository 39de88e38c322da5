//! Maze layout parsing
//!
//! A layout is a block of equal-width text rows:
//! - `X` wall
//! - ` ` corridor holding a food pellet
//! - `O` power item
//! - `P` agent spawn (exactly one)
//! - `r`, `b`, `p`, `o` pursuer spawns
//!
//! Malformed layouts are rejected up front; the simulation assumes a valid one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::GridGeometry;

/// The reference maze. Row 9 is open at both ends (the tunnel).
pub const REFERENCE_LAYOUT: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "X O  X       X  O X",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "X O          X  O X",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Which pursuer a spawn marker produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PursuerIdentity {
    Red,
    Blue,
    Pink,
    Orange,
}

impl PursuerIdentity {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'r' => Some(PursuerIdentity::Red),
            'b' => Some(PursuerIdentity::Blue),
            'p' => Some(PursuerIdentity::Pink),
            'o' => Some(PursuerIdentity::Orange),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PursuerIdentity::Red => 'r',
            PursuerIdentity::Blue => 'b',
            PursuerIdentity::Pink => 'p',
            PursuerIdentity::Orange => 'o',
        }
    }
}

/// One parsed layout cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Food,
    PowerItem,
    AgentSpawn,
    PursuerSpawn(PursuerIdentity),
}

impl Tile {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Tile::Wall),
            ' ' => Some(Tile::Food),
            'O' => Some(Tile::PowerItem),
            'P' => Some(Tile::AgentSpawn),
            c => PursuerIdentity::from_symbol(c).map(Tile::PursuerSpawn),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => 'X',
            Tile::Food => ' ',
            Tile::PowerItem => 'O',
            Tile::AgentSpawn => 'P',
            Tile::PursuerSpawn(id) => id.symbol(),
        }
    }
}

/// Why a layout was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("layout has no agent spawn")]
    MissingAgentSpawn,

    #[error("second agent spawn at row {row}, column {col}")]
    DuplicateAgentSpawn { row: usize, col: usize },
}

/// Validated, immutable maze description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    geometry: GridGeometry,
    tiles: Vec<Tile>,
    agent_spawn: (usize, usize),
}

impl Layout {
    /// Parse and validate rows against the configured dimensions
    pub fn parse<S: AsRef<str>>(rows: &[S], geometry: GridGeometry) -> Result<Self, LayoutError> {
        if rows.len() != geometry.rows {
            return Err(LayoutError::RowCount {
                expected: geometry.rows,
                found: rows.len(),
            });
        }

        let mut tiles = Vec::with_capacity(geometry.rows * geometry.columns);
        let mut agent_spawn = None;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != geometry.columns {
                return Err(LayoutError::RowWidth {
                    row,
                    expected: geometry.columns,
                    found: width,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let tile =
                    Tile::from_symbol(symbol).ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                if tile == Tile::AgentSpawn {
                    if agent_spawn.is_some() {
                        return Err(LayoutError::DuplicateAgentSpawn { row, col });
                    }
                    agent_spawn = Some((row, col));
                }
                tiles.push(tile);
            }
        }

        let agent_spawn = agent_spawn.ok_or(LayoutError::MissingAgentSpawn)?;
        log::debug!(
            "Parsed {}x{} layout, agent spawn at {:?}",
            geometry.rows,
            geometry.columns,
            agent_spawn
        );

        Ok(Self {
            geometry,
            tiles,
            agent_spawn,
        })
    }

    /// The built-in maze on the reference board
    pub fn reference() -> Result<Self, LayoutError> {
        Self::parse(&REFERENCE_LAYOUT, GridGeometry::REFERENCE)
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.geometry.rows || col >= self.geometry.columns {
            return None;
        }
        self.tiles.get(row * self.geometry.columns + col).copied()
    }

    #[inline]
    pub fn agent_spawn(&self) -> (usize, usize) {
        self.agent_spawn
    }

    /// All cells in row-major order as `(row, col, tile)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let columns = self.geometry.columns;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (i / columns, i % columns, tile))
    }
}

use regex::Regex;

use crate::minesweeper::prelude::*;

/// Simple board coordinate; bounded by whichever board it is used against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^\s*(?<row>[0-9]+)\s*[,: ]\s*(?<col>[0-9]+)\s*$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("expected a coordinate of the form row,col; received {s}"));
        };
        let [row, col] = ["row", "col"]
            .map(|name| matches[name].parse::<usize>());
        let [row, col] = [
            row.with_context(|| format!("row out of range in {s}"))?,
            col.with_context(|| format!("col out of range in {s}"))?,
        ];
        Ok(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Determines whether or not the coord lies on a grid of the given size.
    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// The canonical notation of the coord, as accepted by the parser.
    pub fn notate(&self) -> String {
        format!("{},{}", self.row, self.col)
    }

    /// The on-grid neighbours of this coord (up to 8, never itself, no wraparound).
    pub fn neighbours(&self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |offset| {
            let candidate = self + offset;
            candidate.in_bounds(rows, cols).then(|| candidate.coerce())
        })
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Offsets that turn a coordinate into one of its eight surrounding neighbours.
pub static NEIGHBOUR_OFFSETS: [OffsetCoord; 8] = [
    OffsetCoord { rows: -1, cols: -1 },
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: -1, cols: 1 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: -1 },
    OffsetCoord { rows: 1, cols: 0 },
    OffsetCoord { rows: 1, cols: 1 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Determines whether or not the offset lands on a grid of the given size.
    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        0 <= self.rows && (self.rows as usize) < rows && 0 <= self.cols && (self.cols as usize) < cols
    }
}

// C -> OC

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

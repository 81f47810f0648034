use std::collections::{btree_set, BTreeSet};
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CanvasClientError;

/// One cell on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Coordinate {
        Coordinate { x, y }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y`, optionally wrapped in parentheses.
impl FromStr for Coordinate {
    type Err = CanvasClientError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CanvasClientError::InvalidCoordinate {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| invalid("expected two integers separated by a comma"))?;
        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("x is not an integer ({e})")))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(&format!("y is not an integer ({e})")))?;
        Ok(Coordinate { x, y })
    }
}

/// What to do with a region whose start lies past its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvertedRegionPolicy {
    /// Treat the region as containing no cells.
    #[default]
    Empty,
    /// Fail before any request is built.
    Reject,
}

impl FromStr for InvertedRegionPolicy {
    type Err = CanvasClientError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "empty" => Ok(InvertedRegionPolicy::Empty),
            "reject" => Ok(InvertedRegionPolicy::Reject),
            _ => Err(CanvasClientError::InvalidRegionPolicy(input.to_string())),
        }
    }
}

impl Display for InvertedRegionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvertedRegionPolicy::Empty => f.write_str("empty"),
            InvertedRegionPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// An axis-aligned rectangle of cells with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    start: Coordinate,
    end: Coordinate,
}

impl Region {
    pub const fn new(start: Coordinate, end: Coordinate) -> Region {
        Region { start, end }
    }

    pub const fn start(&self) -> Coordinate {
        self.start
    }

    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// `true` when start lies past end on either axis.
    pub const fn is_inverted(&self) -> bool {
        self.start.x > self.end.x || self.start.y > self.end.y
    }

    /// Applies `policy` to an inverted region. Well-formed regions pass through.
    pub fn checked(self, policy: InvertedRegionPolicy) -> Result<Region, CanvasClientError> {
        match policy {
            InvertedRegionPolicy::Reject if self.is_inverted() => {
                Err(CanvasClientError::InvertedRegion { region: self })
            }
            _ => Ok(self),
        }
    }

    /// Number of cells the region covers, zero when inverted.
    pub const fn cell_count(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            let width = self.start.x.abs_diff(self.end.x).saturating_add(1);
            let height = self.start.y.abs_diff(self.end.y).saturating_add(1);
            width.saturating_mul(height)
        }
    }

    pub fn coordinates(&self) -> CoordinateSet {
        enumerate(self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Expands the rectangle bounded by `start` and `end` (inclusive) into every
/// cell it contains. An inverted rectangle yields an empty set.
pub fn enumerate(start: Coordinate, end: Coordinate) -> CoordinateSet {
    let mut coordinates = BTreeSet::new();
    for x in start.x..=end.x {
        for y in start.y..=end.y {
            coordinates.insert(Coordinate { x, y });
        }
    }
    tracing::debug!(
        "enumerated {} coordinates between {} and {}",
        coordinates.len(),
        start,
        end
    );
    CoordinateSet(coordinates)
}

/// The unique cells of a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateSet(BTreeSet<Coordinate>);

impl CoordinateSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.0.contains(coordinate)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Coordinate> {
        self.0.iter()
    }

    /// Fixes an order for the set. Everything that is correlated by position
    /// (aliases, variable names) must be derived from the returned sequence.
    pub fn into_sequence(self) -> CoordinateSequence {
        CoordinateSequence(self.0.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Coordinate;
    type IntoIter = btree_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Coordinates in the one order shared by a batch document and its variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateSequence(Vec<Coordinate>);

impl CoordinateSequence {
    pub const fn new(coordinates: Vec<Coordinate>) -> CoordinateSequence {
        CoordinateSequence(coordinates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }
}

impl From<CoordinateSet> for CoordinateSequence {
    fn from(set: CoordinateSet) -> Self {
        set.into_sequence()
    }
}

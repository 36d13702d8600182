//! Tube sides and per-side tables.

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six faces of the tube's square cross-section.
///
/// `Top`, `Bottom`, `Left` and `Right` run the full length of every curve.
/// `Front` and `Back` are caps that only exist at the very start and very
/// end of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Cap closing the start of the path.
    Front,
    /// Cap closing the end of the path.
    Back,
    /// Longitudinal face on the `+up` side.
    Top,
    /// Longitudinal face on the `-up` side.
    Bottom,
    /// Longitudinal face on the `-right` side.
    Left,
    /// Longitudinal face on the `+right` side.
    Right,
}

impl Side {
    /// All sides, in build order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// The sides that run along every curve.
    pub const LONGITUDINAL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Position of this side in [`Side::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Back => 1,
            Self::Top => 2,
            Self::Bottom => 3,
            Self::Left => 4,
            Self::Right => 5,
        }
    }

    /// Whether this side is an end cap (`Front` or `Back`).
    #[inline]
    #[must_use]
    pub const fn is_cap(self) -> bool {
        matches!(self, Self::Front | Self::Back)
    }

    /// Human-readable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed table holding exactly one value per [`Side`].
///
/// # Example
///
/// ```
/// use tube_types::{Side, SideMap};
///
/// let mut counts = SideMap::from_fn(|_| 0usize);
/// counts[Side::Top] += 2;
///
/// assert_eq!(counts[Side::Top], 2);
/// assert_eq!(counts.iter().map(|(_, c)| *c).sum::<usize>(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideMap<T> {
    values: [T; 6],
}

impl<T> SideMap<T> {
    /// Build a table by calling `f` once per side, in [`Side::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            values: Side::ALL.map(&mut f),
        }
    }

    /// Get the value for `side`.
    #[inline]
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.values[side.index()]
    }

    /// Get the value for `side` mutably.
    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.values[side.index()]
    }

    /// Iterate over `(side, value)` pairs in [`Side::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.values.iter())
    }

    /// Iterate mutably over `(side, value)` pairs in [`Side::ALL`] order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.values.iter_mut())
    }

    /// All values as a slice, in [`Side::ALL`] order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// All values as a mutable slice, in [`Side::ALL`] order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

//! A fixed-size coordinate set using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T`, one bit
//! per cell in row-major order.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0, N)²`.
    OutOfBounds(Coordinate),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "board of {}x{} cells exceeds {} bits", n, n, capacity)
            }
            BitBoardError::OutOfBounds(c) => write!(f, "coordinate {} is off the board", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of coordinates on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(c: Coordinate) -> Option<usize> {
        let n = N as i32;
        if (0..n).contains(&c.x) && (0..n).contains(&c.y) {
            Some(c.y as usize * N + c.x as usize)
        } else {
            None
        }
    }

    /// Create an empty set without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Build a set from coordinates, failing on the first off-board one.
    pub fn from_coords<I>(coords: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for c in coords {
            board.insert(c)?;
        }
        Ok(board)
    }

    /// Number of coordinates in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Off-board coordinates are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `c` to the set.
    pub fn insert(&mut self, c: Coordinate) -> Result<(), BitBoardError> {
        let idx = Self::index(c).ok_or(BitBoardError::OutOfBounds(c))?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Iterator over the members, row by row.
    pub fn iter(&self) -> Iter<T, N> {
        Iter {
            bits: self.bits,
            idx: 0,
        }
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the coordinates held by a bitboard.
#[derive(Clone, Copy)]
pub struct Iter<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Iter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx % N) as i32, (idx / N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

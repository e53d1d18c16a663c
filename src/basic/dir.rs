use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg};

#[cfg(test)]
use rand::Rng;
use Dir::*;

// defined in clockwise order starting at Up
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => Up,
            1 => Right,
            2 => Down,
            _ => Left,
        }
    }
}

/// Opposite direction, two quarter turns away
impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

/// Clockwise rotation by `rhs` quarter turns
impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Up => "up",
            Right => "right",
            Down => "down",
            Left => "left",
        };
        f.write_str(name)
    }
}

impl Dir {
    // clockwise order starting from Up
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Right, Down, Left].iter().copied()
    }

    /// (row, col) offset of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Up => (-1, 0),
            Right => (0, 1),
            Down => (1, 0),
            Left => (0, -1),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        other == -self
    }

    #[cfg(test)]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4u8))
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(Up, 1, Right), (Up, 2, Down), (Left, 1, Up), (Down, 4, Down)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }
}

#[test]
fn test_opposites() {
    for (dir, opposite) in [(Up, Down), (Right, Left), (Down, Up), (Left, Right)] {
        assert_eq!(-dir, opposite);
        assert!(dir.is_opposite(opposite));
        assert!(!dir.is_opposite(dir));
    }
    assert!(!Up.is_opposite(Left));
    assert!(!Right.is_opposite(Down));
}

#[test]
fn test_numeric_encoding() {
    // opposites are exactly 2 apart mod 4
    for dir in Dir::iter() {
        assert_eq!(((-dir) as u8 + 4 - dir as u8) % 4, 2);
    }
}

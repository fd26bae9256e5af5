//! Integer grid vectors and compass direction tables.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A two-dimensional integer vector.
///
/// Used both as a grid coordinate (a cell offset) and as a direction
/// delta between neighbouring cells. Equality and hashing are by value,
/// so vectors are valid map keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    /// Column component.
    pub x: i32,
    /// Row component.
    pub y: i32,
}

/// The eight compass directions (cardinal + diagonal).
pub const DIRS_8: [Vector; 8] = [
    Vector::new(-1, -1),
    Vector::new(-1, 0),
    Vector::new(-1, 1),
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(1, -1),
    Vector::new(1, 0),
    Vector::new(1, 1),
];

/// The four cardinal directions: W, N, S, E.
pub const DIRS_4: [Vector; 4] = [
    Vector::new(-1, 0),
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(1, 0),
];

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector::new(0, 0);

    /// Construct a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (L-inf) length: the number of 8-connected steps needed
    /// to cover this delta.
    pub fn chebyshev(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Whether this delta is one of the eight unit compass directions.
    pub fn is_unit_step(self) -> bool {
        self != Vector::ZERO && self.chebyshev() == 1
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn arithmetic() {
        let a = Vector::new(1, 2);
        let b = Vector::new(3, -4);
        assert_eq!(a + b, Vector::new(4, -2));
        assert_eq!(a - b, Vector::new(-2, 6));
        assert_eq!(-a, Vector::new(-1, -2));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn structural_hashing() {
        let mut m = HashMap::new();
        m.insert(Vector::new(1, 1), "ne");
        assert_eq!(m.get(&Vector::from((1, 1))), Some(&"ne"));
    }

    #[test]
    fn compass_tables_are_unit_steps() {
        assert!(DIRS_8.iter().all(|d| d.is_unit_step()));
        assert!(DIRS_4.iter().all(|d| d.is_unit_step() && (d.x == 0 || d.y == 0)));
        // Every direction's opposite is also in the table.
        for d in DIRS_8 {
            assert!(DIRS_8.contains(&-d));
        }
        assert!(!Vector::ZERO.is_unit_step());
    }

    #[test]
    fn chebyshev_length() {
        assert_eq!(Vector::new(3, -4).chebyshev(), 4);
        assert_eq!(Vector::new(-2, 1).chebyshev(), 2);
    }

    proptest! {
        #[test]
        fn sub_undoes_add(ax in -1000i32..1000, ay in -1000i32..1000,
                          bx in -1000i32..1000, by in -1000i32..1000) {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            prop_assert_eq!((a + b) - b, a);
            prop_assert_eq!(a + (-a), Vector::ZERO);
        }
    }
}

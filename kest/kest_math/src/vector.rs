use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2u = Vector2<u32>;
pub type Vec2f = Vector2<f32>;
pub type Vec2i = Vector2<i32>;

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Copy for Vector2<T> {}
impl<T: Clone> Clone for Vector2<T> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}

impl<T: Debug> Debug for Vector2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: Default> Default for Vector2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for Vector2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}
impl<T: Eq> Eq for Vector2<T> {}

impl<T: Hash> Hash for Vector2<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Copy> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl From<Vec2u> for Vec2f {
    fn from(v: Vec2u) -> Self {
        Self::new(v.x as _, v.y as _)
    }
}

impl From<Vec2u> for Vec2i {
    fn from(v: Vec2u) -> Self {
        Self::new(v.x as _, v.y as _)
    }
}

impl From<Vec2i> for Vec2f {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as _, v.y as _)
    }
}

impl From<Vec2i> for Vec2u {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as _, v.y as _)
    }
}

impl From<Vec2f> for Vec2i {
    fn from(v: Vec2f) -> Self {
        Self::new(v.x as _, v.y as _)
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: ToString> std::string::ToString for Vector2<T> {
    fn to_string(&self) -> String {
        format!("{}, {}", self.x.to_string(), self.y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kest_test::assert_approx_eq;

    #[test]
    fn vec_ops() {
        let a = v2!(3, 4);
        let b = v2!(-1, 2);
        assert_eq!(a + b, v2!(2, 6));
        assert_eq!(a - b, v2!(4, 2));
        assert_eq!(a * 2, v2!(6, 8));
        assert_eq!(v2!(6, 8) / 2, v2!(3, 4));
        assert_eq!(-b, v2!(1, -2));
    }

    #[test]
    fn vec_assign_ops() {
        let mut a = v2!(1, 1);
        a += v2!(2, 3);
        assert_eq!(a, v2!(3, 4));
        a -= v2!(3, 4);
        assert_eq!(a, v2!(0, 0));
    }

    #[test]
    fn vec_conversions() {
        let u: Vec2u = v2!(3u32, 4u32);
        let i: Vec2i = u.into();
        assert_eq!(i, v2!(3i32, 4i32));
        let f: Vec2f = i.into();
        assert_approx_eq!((f.x, f.y), (3.0, 4.0));
        assert_eq!(Vec2i::from((7, 8)), v2!(7, 8));
    }
}

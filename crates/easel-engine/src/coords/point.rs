use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::{AngularVel, Size2};

/// A point in 2D space.
///
/// Generic over the component type so window metrics can stay in `u32`
/// while cameras and surfaces work in `f32`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point2<f32> {
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotates this point by `degrees` around `pivot`.
    ///
    /// Positive angles turn clockwise on screen (+Y points down).
    #[inline]
    pub fn rotated_about(self, pivot: Point2<f32>, degrees: f32) -> Point2<f32> {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - pivot;
        Point2::new(pivot.x + d.x * cos - d.y * sin, pivot.y + d.x * sin + d.y * cos)
    }
}

impl Point2<u32> {
    #[inline]
    pub fn as_f32(self) -> Point2<f32> {
        Point2::new(self.x as f32, self.y as f32)
    }
}

impl<T: Add<Output = T>> Add for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn add(self, rhs: Point2<T>) -> Point2<T> {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn sub(self, rhs: Point2<T>) -> Point2<T> {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn neg(self) -> Point2<T> {
        Point2::new(-self.x, -self.y)
    }
}

/// Elementwise division.
impl<T: Div<Output = T>> Div for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn div(self, rhs: Point2<T>) -> Point2<T> {
        Point2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn div(self, rhs: T) -> Point2<T> {
        Point2::new(self.x / rhs, self.y / rhs)
    }
}

/// Offsets a point by a size (`x + w`, `y + h`).
impl<T: Add<Output = T>> Add<Size2<T>> for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn add(self, rhs: Size2<T>) -> Point2<T> {
        Point2::new(self.x + rhs.w, self.y + rhs.h)
    }
}

/// Scales a point per axis (`x * w`, `y * h`), e.g. by a zoom factor.
impl<T: Mul<Output = T>> Mul<Size2<T>> for Point2<T> {
    type Output = Point2<T>;
    #[inline]
    fn mul(self, rhs: Size2<T>) -> Point2<T> {
        Point2::new(self.x * rhs.w, self.y * rhs.h)
    }
}

/// Velocity integration: moves the point `speed` units along `angle` degrees.
impl AddAssign<AngularVel> for Point2<f32> {
    #[inline]
    fn add_assign(&mut self, vel: AngularVel) {
        let (dx, dy) = vel.components();
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point2<f32>, b: Point2<f32>) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn add_sub_neg() {
        let a = Point2::new(3, 4);
        let b = Point2::new(1, 2);
        assert_eq!(a + b, Point2::new(4, 6));
        assert_eq!(a - b, Point2::new(2, 2));
        assert_eq!(-Point2::new(1.5_f32, -2.0), Point2::new(-1.5, 2.0));
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(Point2::new(7_u32, 9) / 2, Point2::new(3, 4));
        assert_eq!(Point2::new(9_i32, 8) / Point2::new(2, 3), Point2::new(4, 2));
    }

    #[test]
    fn add_size_offsets_point() {
        assert_eq!(Point2::new(1.0, 2.0) + Size2::new(10.0, 20.0), Point2::new(11.0, 22.0));
    }

    #[test]
    fn velocity_integration_uses_degrees() {
        let mut p = Point2::new(10.0_f32, 10.0);
        p += AngularVel::new(2.0, 90.0);
        assert!(approx(p, Point2::new(10.0, 12.0)), "{p:?}");

        let mut q = Point2::zero();
        q += AngularVel::new(3.0, 180.0);
        assert!(approx(q, Point2::new(-3.0, 0.0)), "{q:?}");
    }

    #[test]
    fn velocity_angle_is_not_wrapped() {
        let mut a = Point2::zero();
        let mut b = Point2::zero();
        a += AngularVel::new(1.0, 45.0);
        b += AngularVel::new(1.0, 45.0 + 720.0);
        assert!(approx(a, b));
    }

    #[test]
    fn rotated_about_quarter_turn() {
        let p = Point2::new(2.0, 1.0).rotated_about(Point2::new(1.0, 1.0), 90.0);
        assert!(approx(p, Point2::new(1.0, 2.0)), "{p:?}");
    }
}

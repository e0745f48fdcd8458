use core::ops::{Div, Mul};

/// Width/height pair.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size2<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size2<T> {
    #[inline]
    pub const fn new(w: T, h: T) -> Self {
        Self { w, h }
    }
}

impl Size2<u32> {
    #[inline]
    pub fn as_f32(self) -> Size2<f32> {
        Size2::new(self.w as f32, self.h as f32)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl Size2<f32> {
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { w: v, h: v }
    }

    /// Rounds each axis to the nearest whole pixel, clamping negatives to zero.
    #[inline]
    pub fn round_u32(self) -> Size2<u32> {
        Size2::new(self.w.max(0.0).round() as u32, self.h.max(0.0).round() as u32)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Size2<T> {
    type Output = Size2<T>;
    #[inline]
    fn div(self, rhs: T) -> Size2<T> {
        Size2::new(self.w / rhs, self.h / rhs)
    }
}

/// Elementwise product.
impl<T: Mul<Output = T>> Mul for Size2<T> {
    type Output = Size2<T>;
    #[inline]
    fn mul(self, rhs: Size2<T>) -> Size2<T> {
        Size2::new(self.w * rhs.w, self.h * rhs.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_scalar_truncates_for_integers() {
        assert_eq!(Size2::new(5_u32, 7) / 2, Size2::new(2, 3));
        assert_eq!(Size2::new(5.0_f32, 7.0) / 2.0, Size2::new(2.5, 3.5));
    }

    #[test]
    fn elementwise_product() {
        assert_eq!(Size2::new(2.0, 3.0) * Size2::new(4.0, 0.5), Size2::new(8.0, 1.5));
    }

    #[test]
    fn round_u32_clamps_negative() {
        assert_eq!(Size2::new(-3.0, 4.6).round_u32(), Size2::new(0, 5));
    }
}

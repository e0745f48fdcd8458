use super::{Point2, Size2};

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point2<f32>,
    pub size: Size2<f32>,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Size2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Point2<f32> {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.w <= 0.0 || self.size.h <= 0.0
    }

    /// Clips the rectangle to `[0, bounds]`. Returns `None` when nothing is left.
    ///
    /// wgpu rejects viewports that leave the render target, so camera
    /// rectangles pass through here before they reach a render pass.
    pub fn clamp_to(self, bounds: Size2<f32>) -> Option<Rect> {
        let x0 = self.origin.x.max(0.0);
        let y0 = self.origin.y.max(0.0);
        let max = self.max();
        let x1 = max.x.min(bounds.w);
        let y1 = max.y.min(bounds.h);

        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    // ── clamp_to ──────────────────────────────────────────────────────────

    #[test]
    fn clamp_inside_is_identity() {
        let rect = r(10.0, 10.0, 50.0, 20.0);
        assert_eq!(rect.clamp_to(Size2::new(100.0, 100.0)), Some(rect));
    }

    #[test]
    fn clamp_trims_overhang() {
        let rect = r(-10.0, 80.0, 50.0, 40.0);
        assert_eq!(rect.clamp_to(Size2::new(100.0, 100.0)), Some(r(0.0, 80.0, 40.0, 20.0)));
    }

    #[test]
    fn clamp_outside_returns_none() {
        assert!(r(120.0, 0.0, 10.0, 10.0).clamp_to(Size2::new(100.0, 100.0)).is_none());
    }
}

/// Speed along a heading, in degrees.
///
/// Angles follow screen convention: 0 points right, 90 points down.
/// They are never wrapped; callers own the range.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AngularVel {
    pub speed: f32,
    pub angle: f32,
}

impl AngularVel {
    #[inline]
    pub const fn new(speed: f32, angle: f32) -> Self {
        Self { speed, angle }
    }

    #[inline]
    pub const fn toward(dir: AngularDir, speed: f32) -> Self {
        Self { speed, angle: dir.degrees() }
    }

    /// Cartesian displacement produced by one integration step.
    #[inline]
    pub fn components(self) -> (f32, f32) {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        (self.speed * cos, self.speed * sin)
    }
}

/// Headings for d-pad style movement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AngularDir {
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
}

impl AngularDir {
    #[inline]
    pub const fn degrees(self) -> f32 {
        match self {
            AngularDir::Right => 0.0,
            AngularDir::DownRight => 45.0,
            AngularDir::Down => 90.0,
            AngularDir::DownLeft => 135.0,
            AngularDir::Left => 180.0,
            AngularDir::UpLeft => 225.0,
            AngularDir::Up => 270.0,
            AngularDir::UpRight => 315.0,
        }
    }

    /// Combines held arrow-style inputs into a heading. Opposites cancel.
    pub fn from_axes(up: bool, down: bool, left: bool, right: bool) -> Option<Self> {
        let v = (up && !down, down && !up);
        let h = (left && !right, right && !left);
        match (v, h) {
            ((true, _), (true, _)) => Some(AngularDir::UpLeft),
            ((true, _), (_, true)) => Some(AngularDir::UpRight),
            ((_, true), (true, _)) => Some(AngularDir::DownLeft),
            ((_, true), (_, true)) => Some(AngularDir::DownRight),
            ((true, _), _) => Some(AngularDir::Up),
            ((_, true), _) => Some(AngularDir::Down),
            (_, (true, _)) => Some(AngularDir::Left),
            (_, (_, true)) => Some(AngularDir::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_follow_polar_decomposition() {
        let (dx, dy) = AngularVel::new(4.0, 60.0).components();
        assert!((dx - 2.0).abs() < 1e-4);
        assert!((dy - 4.0 * 60f32.to_radians().sin()).abs() < 1e-4);
    }

    #[test]
    fn toward_uses_direction_angle() {
        assert_eq!(AngularVel::toward(AngularDir::Up, 5.0), AngularVel::new(5.0, 270.0));
    }

    #[test]
    fn from_axes_diagonals_and_cancel() {
        assert_eq!(AngularDir::from_axes(true, false, false, true), Some(AngularDir::UpRight));
        assert_eq!(AngularDir::from_axes(false, true, true, false), Some(AngularDir::DownLeft));
        assert_eq!(AngularDir::from_axes(true, true, false, false), None);
        assert_eq!(AngularDir::from_axes(true, true, true, false), Some(AngularDir::Left));
    }
}

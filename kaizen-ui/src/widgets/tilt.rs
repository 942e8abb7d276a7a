//! Pointer-driven tilt for category cards

use crate::infra::constants::tilt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    /// Image translation in px.
    pub image_shift: (f32, f32),
    pub image_scale: f32,
    /// Call-to-action translation in px.
    pub cta_shift: (f32, f32),
}

impl TiltPose {
    pub const REST: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        image_shift: (0.0, 0.0),
        image_scale: tilt::REST_SCALE,
        cta_shift: (0.0, 0.0),
    };
}

impl Default for TiltPose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Default)]
pub struct TiltEffect {
    pose: TiltPose,
}

impl TiltEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self) -> TiltPose {
        self.pose
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, rect: CardRect) -> TiltPose {
        let nx = normalise(x, rect.left, rect.width);
        let ny = normalise(y, rect.top, rect.height);
        self.pose = TiltPose {
            rotate_x_deg: ny * tilt::ROTATE_X_DEG,
            rotate_y_deg: nx * tilt::ROTATE_Y_DEG,
            image_shift: (nx * tilt::IMAGE_SHIFT_X, ny * tilt::IMAGE_SHIFT_Y),
            image_scale: tilt::IMAGE_SCALE,
            cta_shift: (nx * tilt::CTA_SHIFT_X, ny * tilt::CTA_SHIFT_Y),
        };
        self.pose
    }

    pub fn pointer_leave(&mut self) -> TiltPose {
        self.pose = TiltPose::REST;
        self.pose
    }
}

/// Position within `[start, start + extent]` mapped to `[-0.5, 0.5]`.
fn normalise(value: f32, start: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    ((value - start) / extent - 0.5).clamp(-0.5, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardRect = CardRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn corner_pose() {
        let mut effect = TiltEffect::new();
        let pose = effect.pointer_move(300.0, 50.0, CARD);
        assert!((pose.rotate_x_deg - 2.25).abs() < 1e-5);
        assert!((pose.rotate_y_deg - 3.0).abs() < 1e-5);
        assert_eq!(pose.image_shift, (4.0, -3.0));
        assert_eq!(pose.cta_shift, (2.0, -1.5));
        assert_eq!(pose.image_scale, tilt::IMAGE_SCALE);
    }

    #[test]
    fn centre_is_flat_and_leave_rests() {
        let mut effect = TiltEffect::new();
        let pose = effect.pointer_move(200.0, 100.0, CARD);
        assert_eq!(pose.rotate_x_deg, 0.0);
        assert_eq!(pose.rotate_y_deg, 0.0);

        assert_eq!(effect.pointer_leave(), TiltPose::REST);
        assert_eq!(effect.pose().image_scale, 1.02);
    }

    #[test]
    fn zero_sized_card_does_not_tilt() {
        let mut effect = TiltEffect::new();
        let pose = effect.pointer_move(10.0, 10.0, CardRect::default());
        assert_eq!(pose.rotate_x_deg, 0.0);
        assert_eq!(pose.image_shift, (0.0, 0.0));
    }
}

use crate::config::{PAN_STEP, ZOOM_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A single mutation requested by the input side between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportCommand {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    Reset,
    Quit,
}

/// Pan offset and zoom scale of the visible region.
///
/// `scale` is the size of one pixel step before normalisation, so a smaller
/// scale shows a smaller region of the plane (zoomed in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let step = PAN_STEP * self.scale;

        match direction {
            PanDirection::Left => self.offset_x -= step,
            PanDirection::Right => self.offset_x += step,
            PanDirection::Up => self.offset_y -= step,
            PanDirection::Down => self.offset_y += step,
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale /= ZOOM_FACTOR;
    }

    pub fn zoom_out(&mut self) {
        self.scale *= ZOOM_FACTOR;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies `command`. Returns `false` when the command asks the caller to stop.
    pub fn apply(&mut self, command: ViewportCommand) -> bool {
        match command {
            ViewportCommand::Pan(direction) => self.pan(direction),
            ViewportCommand::ZoomIn => self.zoom_in(),
            ViewportCommand::ZoomOut => self.zoom_out(),
            ViewportCommand::Reset => self.reset(),
            ViewportCommand::Quit => return false,
        }

        debug_assert!(self.scale > 0.0, "viewport scale must stay positive");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_is_centred_at_unit_scale() {
        let viewport = Viewport::new();

        assert_eq!(viewport.offset_x, 0.0);
        assert_eq!(viewport.offset_y, 0.0);
        assert_eq!(viewport.scale, 1.0);
    }

    #[test]
    fn test_pan_moves_by_scale_proportional_step() {
        let mut viewport = Viewport::new();
        viewport.scale = 0.5;

        viewport.pan(PanDirection::Right);
        viewport.pan(PanDirection::Down);
        viewport.pan(PanDirection::Down);

        assert_eq!(viewport.offset_x, 5.0);
        assert_eq!(viewport.offset_y, 10.0);
    }

    #[test]
    fn test_pan_left_and_up_are_negative() {
        let mut viewport = Viewport::new();

        viewport.pan(PanDirection::Left);
        viewport.pan(PanDirection::Up);

        assert_eq!(viewport.offset_x, -10.0);
        assert_eq!(viewport.offset_y, -10.0);
    }

    #[test]
    fn test_zoom_in_then_out_restores_scale() {
        let mut viewport = Viewport::new();

        viewport.zoom_in();
        assert!(viewport.scale < 1.0);

        viewport.zoom_out();
        assert!((viewport.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_after_pans_and_zooms_restores_default() {
        let mut viewport = Viewport::new();

        for _ in 0..20 {
            viewport.apply(ViewportCommand::ZoomIn);
            viewport.apply(ViewportCommand::Pan(PanDirection::Left));
            viewport.apply(ViewportCommand::Pan(PanDirection::Down));
        }
        viewport.apply(ViewportCommand::ZoomOut);
        viewport.apply(ViewportCommand::Reset);

        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_quit_leaves_viewport_untouched_and_signals_stop() {
        let mut viewport = Viewport::new();
        viewport.pan(PanDirection::Right);
        let before = viewport;

        let keep_running = viewport.apply(ViewportCommand::Quit);

        assert!(!keep_running);
        assert_eq!(viewport, before);
    }
}

use std::time::Duration;

pub const FADE_DURATION: Duration = Duration::from_millis(150);
pub const OPAQUE: u8 = 255;
pub const TRANSPARENT: u8 = 0;

/// Opacity of a widget plus the fade it is running, if any. Advanced by the render loop through
/// [`FadeState::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FadeState {
    opacity: u8,
    from: u8,
    target: u8,
    remaining: Duration,
}

impl Default for FadeState {
    fn default() -> Self {
        Self::new(OPAQUE)
    }
}

impl FadeState {
    pub fn new(opacity: u8) -> Self {
        Self {
            opacity,
            from: opacity,
            target: opacity,
            remaining: Duration::ZERO,
        }
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_animating(&self) -> bool {
        !self.remaining.is_zero()
    }

    /// Starts a fade towards `target`. A fade already heading there, or an idle widget already at
    /// `target`, is left untouched and `false` is returned.
    pub fn fade_to(&mut self, target: u8) -> bool {
        let settled = if self.is_animating() {
            self.target == target
        } else {
            self.opacity == target
        };

        if settled {
            return false;
        }

        self.from = self.opacity;
        self.target = target;
        self.remaining = FADE_DURATION;
        true
    }

    /// Jumps to `opacity`, cancelling any running fade
    pub fn set_opacity(&mut self, opacity: u8) {
        *self = Self::new(opacity);
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.is_animating() {
            return;
        }

        self.remaining = self.remaining.saturating_sub(dt);

        let t = 1.0 - self.remaining.as_secs_f32() / FADE_DURATION.as_secs_f32();
        let from = self.from as f32;
        let to = self.target as f32;
        self.opacity = (from + (to - from) * t).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_runs_to_target() {
        let mut fade = FadeState::default();
        assert!(fade.fade_to(TRANSPARENT));
        assert!(fade.is_animating());

        fade.tick(Duration::from_millis(75));
        assert!(fade.opacity() > 100 && fade.opacity() < 155);

        fade.tick(Duration::from_millis(100));
        assert_eq!(fade.opacity(), TRANSPARENT);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut fade = FadeState::default();
        assert!(fade.fade_to(TRANSPARENT));
        fade.tick(Duration::from_millis(50));
        let remaining = fade.remaining();

        assert!(!fade.fade_to(TRANSPARENT));
        assert_eq!(fade.remaining(), remaining);
    }

    #[test]
    fn test_idle_at_target_is_noop() {
        let mut fade = FadeState::new(OPAQUE);
        assert!(!fade.fade_to(OPAQUE));
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_reverse_mid_flight() {
        let mut fade = FadeState::default();
        fade.fade_to(TRANSPARENT);
        fade.tick(Duration::from_millis(75));
        let halfway = fade.opacity();

        assert!(fade.fade_to(OPAQUE));
        assert_eq!(fade.opacity(), halfway);
        fade.tick(FADE_DURATION);
        assert_eq!(fade.opacity(), OPAQUE);
    }
}

//! One-shot visibility latch behind the section entrance animations.
//!
//! A section starts hidden and flips to revealed the first time enough of it
//! is on screen. It never flips back: this drives an entrance, not a live
//! visibility indicator.

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    threshold: f64,
}

impl RevealConfig {
    /// Fraction of the region's area that must be visible, clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    config: RevealConfig,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one observation. Returns `true` only on the hidden -> revealed
    /// transition; later observations are ignored.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.revealed || !intersecting || ratio.is_nan() {
            return false;
        }
        if ratio >= self.config.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Direction a block travels from while entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Rise,
    FromLeft,
    FromRight,
}

const ENTRANCE_BASE: &str = "transition-all duration-500 ease-out";

impl Entrance {
    pub fn class(self, revealed: bool) -> String {
        let state = if revealed {
            "opacity-100 translate-x-0 translate-y-0"
        } else {
            match self {
                Self::Rise => "opacity-0 translate-y-5",
                Self::FromLeft => "opacity-0 -translate-x-5",
                Self::FromRight => "opacity-0 translate-x-5",
            }
        };
        format!("{ENTRANCE_BASE} {state}")
    }
}

pub fn delay_style(ms: u64) -> String {
    format!("transition-delay: {ms}ms")
}

/// Inline style staggering the `index`th item of a list by `step_ms`.
pub fn stagger_delay(index: usize, step_ms: u64) -> String {
    delay_style(index as u64 * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = RevealLatch::new(RevealConfig::default());
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = RevealLatch::new(RevealConfig::new(0.1));
        assert!(!latch.observe(0.05, true));
        assert!(!latch.is_revealed());
        assert!(latch.observe(0.1, true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveals_only_once() {
        let mut latch = RevealLatch::new(RevealConfig::default());
        assert!(latch.observe(0.5, true));
        assert!(!latch.observe(0.9, true));
        assert!(!latch.observe(0.0, false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_never_resets() {
        let mut latch = RevealLatch::new(RevealConfig::default());
        let samples = [
            (0.0, false),
            (0.2, true),
            (0.0, false),
            (0.01, true),
            (1.0, true),
        ];
        let transitions = samples
            .iter()
            .filter(|(ratio, hit)| latch.observe(*ratio, *hit))
            .count();
        assert_eq!(transitions, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_not_intersecting_is_ignored() {
        let mut latch = RevealLatch::new(RevealConfig::new(0.0));
        assert!(!latch.observe(0.0, false));
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn test_config_clamps() {
        assert_eq!(RevealConfig::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealConfig::new(2.5).threshold(), 1.0);
        assert_eq!(RevealConfig::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(RevealConfig::default().threshold(), 0.1);
    }

    #[test]
    fn test_entrance_classes() {
        assert!(Entrance::Rise.class(false).contains("opacity-0 translate-y-5"));
        assert!(Entrance::FromLeft.class(false).contains("-translate-x-5"));
        assert!(Entrance::FromRight.class(false).ends_with("opacity-0 translate-x-5"));
        for entrance in [Entrance::Rise, Entrance::FromLeft, Entrance::FromRight] {
            let shown = entrance.class(true);
            assert!(shown.starts_with(ENTRANCE_BASE));
            assert!(shown.contains("opacity-100"));
        }
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 200), "transition-delay: 0ms");
        assert_eq!(stagger_delay(3, 150), "transition-delay: 450ms");
    }
}

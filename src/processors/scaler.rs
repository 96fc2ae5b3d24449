// imgfit/src/processors/scaler.rs
use crate::core::ResizePlan;

/// Decides whether an image needs shrinking so that its long side fits
/// within a maximum, and computes the target dimensions when it does.
pub struct Scaler {
    max_size: u32,
}

impl Scaler {
    pub fn new(max_size: u32) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Plans a resize for an image of the given dimensions.
    ///
    /// The long side (ties go to width) is capped at `max_size`; the short
    /// side scales proportionally, truncating toward zero.
    pub fn plan(&self, width: u32, height: u32) -> ResizePlan {
        if width >= height {
            if width <= self.max_size {
                return ResizePlan::Keep;
            }
            let new_height = Self::scale_short(height, width, self.max_size);
            ResizePlan::Shrink {
                width: self.max_size,
                height: new_height,
            }
        } else {
            if height <= self.max_size {
                return ResizePlan::Keep;
            }
            let new_width = Self::scale_short(width, height, self.max_size);
            ResizePlan::Shrink {
                width: new_width,
                height: self.max_size,
            }
        }
    }

    fn scale_short(short: u32, long: u32, max_size: u32) -> u32 {
        // Truncation, not rounding, matches the conventional int() cast.
        let scaled = (short as f64 * max_size as f64 / long as f64) as u32;
        scaled.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bounds_keeps() {
        let scaler = Scaler::new(4000);
        assert_eq!(scaler.plan(2000, 1000), ResizePlan::Keep);
        assert_eq!(scaler.plan(4000, 4000), ResizePlan::Keep);
        assert_eq!(scaler.plan(1, 1), ResizePlan::Keep);
    }

    #[test]
    fn landscape_caps_width() {
        let scaler = Scaler::new(4000);
        assert_eq!(
            scaler.plan(8000, 4000),
            ResizePlan::Shrink {
                width: 4000,
                height: 2000
            }
        );
    }

    #[test]
    fn portrait_caps_height() {
        let scaler = Scaler::new(4000);
        assert_eq!(
            scaler.plan(3000, 6000),
            ResizePlan::Shrink {
                width: 2000,
                height: 4000
            }
        );
    }

    #[test]
    fn square_over_limit_takes_width_branch() {
        let scaler = Scaler::new(100);
        assert_eq!(
            scaler.plan(500, 500),
            ResizePlan::Shrink {
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn short_side_truncates_toward_zero() {
        // 681 * 1000 / 1023 = 665.69..., truncates to 665.
        let scaler = Scaler::new(1000);
        assert_eq!(
            scaler.plan(1023, 681),
            ResizePlan::Shrink {
                width: 1000,
                height: 665
            }
        );
    }

    #[test]
    fn long_side_exact_after_shrink() {
        let scaler = Scaler::new(1200);
        for &(w, h) in &[(5000u32, 3333u32), (1201, 1200), (9999, 123)] {
            match scaler.plan(w, h) {
                ResizePlan::Shrink { width, height } => {
                    assert_eq!(width.max(height), 1200);
                }
                ResizePlan::Keep => panic!("expected shrink for {}x{}", w, h),
            }
        }
    }

    #[test]
    fn degenerate_short_side_clamps_to_one() {
        let scaler = Scaler::new(100);
        assert_eq!(
            scaler.plan(10000, 3),
            ResizePlan::Shrink {
                width: 100,
                height: 1
            }
        );
    }

    #[test]
    fn aspect_ratio_within_one_pixel() {
        let scaler = Scaler::new(777);
        let (w, h) = (4321u32, 1234u32);
        match scaler.plan(w, h) {
            ResizePlan::Shrink { width, height } => {
                let expected = h as f64 * 777.0 / w as f64;
                assert!((height as f64 - expected).abs() <= 1.0);
                assert_eq!(width, 777);
            }
            ResizePlan::Keep => panic!("expected shrink"),
        }
    }
}

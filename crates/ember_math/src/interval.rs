/// Closed range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Every non-negative distance along a ray.
    pub const FORWARD: Interval = Interval::new(0.0, f64::INFINITY);

    /// [0, 1]
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Pull `x` into the range. NaN maps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = Interval::new(0.0, 10.0);

        assert!(range.contains(0.0));
        assert!(range.contains(10.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(-0.1));
        assert!(!range.contains(10.1));
    }

    #[test]
    fn test_surrounds_is_exclusive() {
        let range = Interval::new(0.0, 10.0);

        assert!(!range.surrounds(0.0));
        assert!(!range.surrounds(10.0));
        assert!(range.surrounds(5.0));
    }

    #[test]
    fn test_clamp() {
        let range = Interval::new(0.0, 10.0);

        assert_eq!(range.clamp(-5.0), 0.0);
        assert_eq!(range.clamp(5.0), 5.0);
        assert_eq!(range.clamp(15.0), 10.0);
        assert_eq!(range.clamp(f64::NAN), 0.0);
        assert_eq!(range.clamp(f64::INFINITY), 10.0);
    }

    #[test]
    fn test_forward() {
        assert!(Interval::FORWARD.contains(0.0));
        assert!(!Interval::FORWARD.contains(-1e-12));
        assert!(Interval::FORWARD.contains(1e300));
        assert!(!Interval::FORWARD.contains(f64::NAN));
    }
}

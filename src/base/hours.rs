/// A non-negative duration of work, stored as whole minutes so that
/// quantities stay exact and hashable. Fractional hours in external data
/// are rounded to the nearest minute.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Hours(u32);

impl Hours {
    /// Largest hour value accepted by the entry form.
    pub const MAX_HOUR_PART: u32 = 23;

    /// Largest minute value accepted by the entry form.
    pub const MAX_MINUTE_PART: u32 = 60;

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Builds from separate hour/minute fields, clamping each to the bounds
    /// the entry form enforces. Returns the value and whether any field was
    /// adjusted.
    pub fn from_parts_clamped(hours: u32, minutes: u32) -> (Self, bool) {
        let h = hours.min(Self::MAX_HOUR_PART);
        let m = minutes.min(Self::MAX_MINUTE_PART);
        (Self(h * 60 + m), h != hours || m != minutes)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The duration as decimal hours, for rate computations.
    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / 60.0
    }
}

impl std::fmt::Display for Hours {
    /// Renders as `8h 30min`, `45min`, or `0h`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, m) = (self.0 / 60, self.0 % 60);
        match (h, m) {
            (0, 0) => write!(f, "0h"),
            (0, m) => write!(f, "{}min", m),
            (h, 0) => write!(f, "{}h", h),
            (h, m) => write!(f, "{}h {}min", h, m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Hours::from_minutes(0), "0h")]
    #[case(Hours::from_minutes(45), "45min")]
    #[case(Hours::from_minutes(480), "8h")]
    #[case(Hours::from_minutes(510), "8h 30min")]
    fn test_to_string(#[case] hours: Hours, #[case] want: &str) {
        assert_eq!(hours.to_string(), want)
    }

    #[rstest]
    #[case(8, 30, Hours::from_minutes(510), false)]
    #[case(0, 0, Hours::from_minutes(0), false)]
    #[case(24, 0, Hours::from_minutes(23 * 60), true)]
    #[case(8, 75, Hours::from_minutes(8 * 60 + 60), true)]
    #[case(23, 60, Hours::from_minutes(23 * 60 + 60), false)]
    fn test_from_parts_clamped(
        #[case] h: u32,
        #[case] m: u32,
        #[case] want: Hours,
        #[case] want_adjusted: bool,
    ) {
        assert_eq!(Hours::from_parts_clamped(h, m), (want, want_adjusted))
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(Hours::from_minutes(510).to_decimal(), 8.5);
        assert_eq!(Hours::from_minutes(0).to_decimal(), 0.0);
    }
}

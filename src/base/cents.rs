/// Integral representation of monetary quantities up to two decimal places.
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
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The quantity in whole currency units, for ratio computations.
    pub fn to_units(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.abs().0;
        let whole = (abs / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if self.is_negative() {
            write!(f, "({}.{:02})", grouped, abs % 100)
        } else {
            write!(f, "{}.{:02}", grouped, abs % 100)
        }
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cents(0), "0.00")]
    #[case(Cents(10), "0.10")]
    #[case(Cents(-123), "(1.23)")]
    #[case(Cents(123456), "1,234.56")]
    #[case(Cents(123456789), "1,234,567.89")]
    #[case(Cents(-123456789), "(1,234,567.89)")]
    fn test_to_string(#[case] cents: Cents, #[case] want: &str) {
        assert_eq!(cents.to_string(), want)
    }

    #[rstest]
    #[case("0", Cents(0))]
    #[case("0.", Cents(0))]
    #[case(".0", Cents(0))]
    #[case("-0", Cents(0))]
    #[case("1", Cents(100))]
    #[case("+1.", Cents(100))]
    #[case("-.1", Cents(-10))]
    #[case("123456", Cents(12345600))]
    #[case("1234.56", Cents(123456))]
    #[case("1,234.56", Cents(123456))]
    #[case("0001,234.56789", Cents(123456))]
    fn test_from_str(#[case] s: &str, #[case] want: Cents) {
        assert_eq!(s.parse::<Cents>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("+")]
    #[case("-")]
    #[case(".")]
    #[case("+a.")]
    #[case("--0.")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Cents>().is_err())
    }

    #[test]
    fn test_to_units() {
        assert_eq!(Cents(12345).to_units(), 123.45);
        assert_eq!(Cents(-50).to_units(), -0.5);
    }
}

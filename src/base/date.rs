use crate::base::Datepart;

/// A calendar date without time or timezone information. Values are
/// guaranteed to be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999 - 12 - 31));

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self(time::macros::date!(2015 - 03 - 30))
    }

    /// `0` for Sunday through `6` for Saturday.
    pub fn weekday_from_sunday(self) -> u8 {
        self.0.weekday().number_days_from_sunday()
    }

    /// The Monday of the ISO week containing this date. Clamped to `MIN`
    /// for the degenerate first week of year 0.
    pub fn monday_of_week(self) -> Self {
        let back = self.0.weekday().number_days_from_monday() as i32;
        self.shift(Datepart::Day, -back).unwrap_or(Self::MIN)
    }

    /// Number of calendar days from `self` to `other`. Negative if `other`
    /// is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0.to_julian_day() - self.0.to_julian_day()) as i64
    }

    pub fn format(
        self,
        fmt: &(impl time::formatting::Formattable + ?Sized),
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }

    /// dd/MM/yyyy, the rendering used by reports.
    pub fn dmy(self) -> String {
        format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }

    pub fn first_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
            Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    pub fn last_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
            Datepart::Month => {
                let len = self.0.month().length(self.year());
                Self::from_ymd(self.year(), self.month(), len)
                    .expect("final day of month should be computed correctly")
            }
        }
    }

    /// Offsets the given date by the given datepart, returning `None` if the
    /// resultant date is out of bounds.
    ///
    /// When shifting by years or months, clamps the resultant date's day to
    /// the resultant month's last-day-of-month. For example, if the original
    /// date is a Feb 29, shifting by 1 year will yield the next year's Feb 28.
    pub fn shift(self, part: Datepart, offset: i32) -> Option<Self> {
        let (y, m) = match part {
            Datepart::Day => {
                return self
                    .0
                    .checked_add(time::Duration::days(offset as i64))
                    .and_then(Self::new);
            }
            Datepart::Year => (self.year().checked_add(offset)?, self.month() as i32),
            Datepart::Month => {
                let mut y = self.year();
                let mut m = (self.month() as i32).checked_add(offset)?;
                if m > 12 {
                    y += (m - 1) / 12;
                    m = (m - 1) % 12 + 1;
                } else if m < 1 {
                    y += (m - 12) / 12;
                    m = (m % 12 + 11) % 12 + 1;
                }
                (y, m)
            }
        };
        let dt = Self::from_ymd(y, m as u8, 1)?.last_of(Datepart::Month);
        Self::from_ymd(y, m as u8, dt.day().min(self.day()))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("date must be in yyyy-mm-dd format")]
    BadFormat,
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{y, Y, m, M, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{y, Y, m, M, d, D}` and `n` is an integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            let fmt = time::macros::format_description!("[year]-[month]-[day]");
            return time::Date::parse(s, fmt)
                .map_err(|_| Self::Err::BadFormat)
                .and_then(|x| Self::new(x).ok_or(Self::Err::OutOfRange));
        }

        let bytes = s.as_bytes();
        let offset: i32 = if bytes.len() == 1 {
            0
        } else {
            std::str::from_utf8(&bytes[1..])
                .map_err(|_| Self::Err::InvalidFirstChar)?
                .parse::<i32>()?
        };
        let today = Self::today();
        match bytes[0] as char {
            'd' | 'D' => today.shift(Datepart::Day, offset),
            'y' => today.first_of(Datepart::Year).shift(Datepart::Year, offset),
            'Y' => today.last_of(Datepart::Year).shift(Datepart::Year, offset),
            'm' => today
                .first_of(Datepart::Month)
                .shift(Datepart::Month, offset),
            'M' => today
                .shift(Datepart::Month, offset)
                .map(|dt| dt.last_of(Datepart::Month)),
            _ => None,
        }
        .ok_or(Self::Err::InvalidFirstChar)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

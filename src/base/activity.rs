use crate::base;

/// A daily work record: money earned and time driven on one calendar date.
/// Multiple entries per date are allowed and summed by the aggregations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    #[serde(rename = "i")]
    id: base::Id,
    #[serde(rename = "d")]
    date: base::Date,
    #[serde(rename = "e")]
    earned: base::Cents,
    #[serde(rename = "h")]
    hours: base::Hours,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty", default)]
    note: String,
}

impl Activity {
    /// Builds a new record with a fresh id. The earned amount is normalized
    /// to non-negative; directionality lives in which table a record
    /// belongs to, never in its sign.
    pub fn new(date: base::Date, earned: base::Cents, hours: base::Hours, note: String) -> Self {
        Self {
            id: base::Id::generate(),
            date,
            earned: earned.abs(),
            hours,
            note,
        }
    }

    pub fn id(&self) -> base::Id {
        self.id
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn earned(&self) -> base::Cents {
        self.earned
    }

    pub fn hours(&self) -> base::Hours {
        self.hours
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_date(&mut self, date: base::Date) {
        self.date = date;
    }

    /// Re-normalizes sign, like the creation path.
    pub fn set_earned(&mut self, earned: base::Cents) {
        self.earned = earned.abs();
    }

    pub fn set_hours(&mut self, hours: base::Hours) {
        self.hours = hours;
    }

    pub fn set_note(&mut self, note: String) {
        self.note = note;
    }
}

impl base::Record for Activity {
    fn id(&self) -> base::Id {
        self.id
    }

    fn date(&self) -> base::Date {
        self.date
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Activity {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        r#"{"i":7,"d":"2024-01-01","e":10000,"h":300}"#,
        Activity {
            id: 7u64.into(),
            date: "2024-01-01".parse().unwrap(),
            earned: base::Cents(10000),
            hours: base::Hours::from_minutes(300),
            note: String::new(),
        },
    )]
    #[case(
        r#"{"i":8,"d":"2024-01-02","e":0,"h":0,"n":"lluvia\ntodo el dia"}"#,
        Activity {
            id: 8u64.into(),
            date: "2024-01-02".parse().unwrap(),
            earned: base::Cents(0),
            hours: base::Hours::from_minutes(0),
            note: String::from("lluvia\ntodo el dia"),
        },
    )]
    fn test_serde(#[case] s: &str, #[case] a: Activity) {
        assert_eq!(s.parse::<Activity>().unwrap(), a);
        assert_eq!(a.to_string(), s);
    }

    #[rstest]
    #[case(r#"{"i":7,"d":"bad","e":10000,"h":300}"#)]
    #[case(r#"{"d":"2024-01-01","e":10000,"h":300}"#)]
    #[case(r#"{"i":7,"d":"2024-01-01","e":100.5,"h":300}"#)]
    fn test_deserialize_failing(#[case] s: &str) {
        assert!(s.parse::<Activity>().is_err())
    }

    #[test]
    fn test_sign_normalized_on_writes() {
        let mut a = Activity::new(
            "2024-01-01".parse().unwrap(),
            base::Cents(-5000),
            base::Hours::from_minutes(60),
            String::new(),
        );
        assert_eq!(a.earned(), base::Cents(5000));
        a.set_earned(base::Cents(-250));
        assert_eq!(a.earned(), base::Cents(250));
    }
}

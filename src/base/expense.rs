use crate::base;

/// A categorized cost record tied to a date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Expense {
    #[serde(rename = "i")]
    id: base::Id,
    #[serde(rename = "d")]
    date: base::Date,
    #[serde(rename = "a")]
    amount: base::Cents,
    #[serde(rename = "c")]
    category: base::Category,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty", default)]
    note: String,
}

impl Expense {
    /// Builds a new record with a fresh id and a sign-normalized amount.
    pub fn new(
        date: base::Date,
        amount: base::Cents,
        category: base::Category,
        note: String,
    ) -> Self {
        Self {
            id: base::Id::generate(),
            date,
            amount: amount.abs(),
            category,
            note,
        }
    }

    pub fn id(&self) -> base::Id {
        self.id
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn category(&self) -> base::Category {
        self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_date(&mut self, date: base::Date) {
        self.date = date;
    }

    /// Re-normalizes sign, like the creation path.
    pub fn set_amount(&mut self, amount: base::Cents) {
        self.amount = amount.abs();
    }

    pub fn set_category(&mut self, category: base::Category) {
        self.category = category;
    }

    pub fn set_note(&mut self, note: String) {
        self.note = note;
    }
}

impl base::Record for Expense {
    fn id(&self) -> base::Id {
        self.id
    }

    fn date(&self) -> base::Date {
        self.date
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Expense {
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
        r#"{"i":7,"d":"2024-01-01","a":2000,"c":"Nafta"}"#,
        Expense {
            id: 7u64.into(),
            date: "2024-01-01".parse().unwrap(),
            amount: base::Cents(2000),
            category: base::Category::Nafta,
            note: String::new(),
        },
    )]
    #[case(
        r#"{"i":9,"d":"2024-02-15","a":150,"c":"Peajes","n":"autopista"}"#,
        Expense {
            id: 9u64.into(),
            date: "2024-02-15".parse().unwrap(),
            amount: base::Cents(150),
            category: base::Category::Peajes,
            note: String::from("autopista"),
        },
    )]
    fn test_serde(#[case] s: &str, #[case] e: Expense) {
        assert_eq!(s.parse::<Expense>().unwrap(), e);
        assert_eq!(e.to_string(), s);
    }

    #[rstest]
    #[case(r#"{"i":7,"d":"2024-01-01","a":2000,"c":"Gasolina"}"#)]
    #[case(r#"{"i":7,"d":"2024-01-01","a":20.00,"c":"Nafta"}"#)]
    #[case(r#"{"i":7,"a":2000,"c":"Nafta"}"#)]
    fn test_deserialize_failing(#[case] s: &str) {
        assert!(s.parse::<Expense>().is_err())
    }

    #[test]
    fn test_sign_normalized_on_writes() {
        let mut e = Expense::new(
            "2024-01-01".parse().unwrap(),
            base::Cents(-2000),
            base::Category::Comida,
            String::new(),
        );
        assert_eq!(e.amount(), base::Cents(2000));
        e.set_amount(base::Cents(-1));
        assert_eq!(e.amount(), base::Cents(1));
    }
}

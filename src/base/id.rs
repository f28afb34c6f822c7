/// Opaque record identifier, assigned once at creation and never reused.
/// Derived from the creation timestamp, so ids are monotonic and iteration
/// in id order is creation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Id(u64);

impl Id {
    /// Returns a fresh id.
    #[cfg(not(test))]
    pub fn generate() -> Self {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self(nanos.max(0) as u64)
    }

    /// Returns a fresh id. Sequential starting at 1001 so tests are
    /// deterministic.
    #[cfg(test)]
    pub fn generate() -> Self {
        use std::cell::Cell;
        thread_local! {
            static NEXT: Cell<u64> = const { Cell::new(1001) };
        }
        NEXT.with(|next| {
            let id = next.get();
            next.set(id + 1);
            Self(id)
        })
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for Id {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

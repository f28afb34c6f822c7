use crate::base;

/// Behavior shared by the two persisted record kinds.
pub trait Record: Clone + std::fmt::Debug {
    fn id(&self) -> base::Id;
    fn date(&self) -> base::Date;
}

/// A persisted record list, indexed by id. Ids are timestamp-derived and
/// monotonic, so iterating in key order is iterating in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<R>(std::collections::BTreeMap<base::Id, R>);

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: base::Id) -> bool {
        self.0.contains_key(&id)
    }

    pub fn get(&self, id: base::Id) -> Option<&R> {
        self.0.get(&id)
    }

    pub fn get_mut(&mut self, id: base::Id) -> Option<&mut R> {
        self.0.get_mut(&id)
    }

    /// Inserts a record, replacing any existing record with the same id.
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, r: R) -> Option<R> {
        self.0.insert(r.id(), r)
    }

    /// Removes and returns the record with the given id, or `None` if no
    /// such record exists (the table is left unmodified).
    pub fn remove(&mut self, id: base::Id) -> Option<R> {
        self.0.remove(&id)
    }

    /// Iterates records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.0.values()
    }

    /// Iterates records whose date falls inside `interval`, both ends
    /// inclusive, preserving relative order. `Interval::MAX` is the
    /// identity filter.
    pub fn in_interval(&self, interval: base::Interval) -> impl Iterator<Item = &R> {
        self.iter().filter(move |r| interval.contains(r.date()))
    }
}

impl<R: Record> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::collections::btree_map::IntoValues<base::Id, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<R: Record> FromIterator<R> for Table<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self(iter.into_iter().map(|r| (r.id(), r)).collect())
    }
}

impl<'a, R: Record> FromIterator<&'a R> for Table<R> {
    fn from_iter<T: IntoIterator<Item = &'a R>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl<R: Record + std::fmt::Display> std::fmt::Display for Table<R> {
    /// Writes one record per line with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid record at line {line}")]
    Record {
        line: usize,
        source: serde_json::Error,
    },
    #[error("duplicate id {id} at line {line}")]
    DuplicateId { line: usize, id: base::Id },
}

impl<R> std::str::FromStr for Table<R>
where
    R: Record + std::str::FromStr<Err = serde_json::Error>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = Self(Default::default());
        for (i, line) in s.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let r = line.parse::<R>().map_err(|e| ParseError::Record {
                line: i + 1,
                source: e,
            })?;
            let id = r.id();
            if table.0.insert(id, r).is_some() {
                return Err(ParseError::DuplicateId { line: i + 1, id });
            }
        }
        Ok(table)
    }
}

impl<R> TryFrom<&str> for Table<R>
where
    R: Record + std::str::FromStr<Err = serde_json::Error>,
{
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

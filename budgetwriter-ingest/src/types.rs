use serde::Serialize;
use std::fmt;

/// Calendar month used as the aggregation key.
///
/// Ordering follows the calendar, so iterating an [`crate::Aggregate`]
/// always goes January through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Map a month number (1 = January) to its month.
    pub fn from_number(n: u32) -> Option<Month> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Canonical English name; also the name of the sheet tab for that month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized (item, amount) pair. Both cells are kept as the raw CSV text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub item: String,
    pub amount: String,
}

impl Entry {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
        }
    }

    /// Two-cell row as written to the item/amount block.
    pub fn as_row(&self) -> Vec<String> {
        vec![self.item.clone(), self.amount.clone()]
    }
}

/// Budget category as exported by the provider. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single-cell row as written to the category block.
    pub fn as_row(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

/// Entries and categories for one month, index-aligned.
///
/// The two sequences can only grow together through [`MonthBucket::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    entries: Vec<Entry>,
    categories: Vec<Category>,
}

impl MonthBucket {
    pub fn push(&mut self, entry: Entry, category: Category) {
        self.entries.push(entry);
        self.categories.push(category);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entry, &Category)> {
        self.entries.iter().zip(self.categories.iter())
    }

    pub fn extend(&mut self, other: MonthBucket) {
        self.entries.extend(other.entries);
        self.categories.extend(other.categories);
    }
}

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{Category, Entry, Month, MonthBucket};

/// Month-keyed collection of entries and categories built over one run.
///
/// Append-only. A bucket is created on first reference to its month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Aggregate {
    months: BTreeMap<Month, MonthBucket>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for `month`, inserting an empty one if it doesn't exist yet.
    pub fn bucket_mut(&mut self, month: Month) -> &mut MonthBucket {
        self.months.entry(month).or_default()
    }

    pub fn push(&mut self, month: Month, entry: Entry, category: Category) {
        self.bucket_mut(month).push(entry, category);
    }

    pub fn get(&self, month: Month) -> Option<&MonthBucket> {
        self.months.get(&month)
    }

    /// Buckets in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthBucket)> {
        self.months.iter().map(|(m, b)| (*m, b))
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    /// Number of months present.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.months.values().map(MonthBucket::len).sum()
    }

    /// Append every bucket of `other` after what is already here.
    pub fn extend(&mut self, other: Aggregate) {
        for (month, bucket) in other.months {
            self.bucket_mut(month).extend(bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_created_on_first_push() {
        let mut agg = Aggregate::new();
        assert!(agg.get(Month::May).is_none());

        agg.push(Month::May, Entry::new("Coffee Shop", "4.50"), Category::new("Dining"));

        let may = agg.get(Month::May).unwrap();
        assert_eq!(may.entries(), &[Entry::new("Coffee Shop", "4.50")]);
        assert_eq!(may.categories(), &[Category::new("Dining")]);
        assert_eq!(agg.len(), 1);
    }

    #[test]
    fn test_bucket_mut_does_not_duplicate_months() {
        let mut agg = Aggregate::new();
        agg.bucket_mut(Month::March);
        agg.bucket_mut(Month::March)
            .push(Entry::new("Gas", "30.00"), Category::new("Gas/Automotive"));
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.total_entries(), 1);
    }

    #[test]
    fn test_iterates_in_calendar_order() {
        let mut agg = Aggregate::new();
        agg.push(Month::November, Entry::new("a", "1"), Category::default());
        agg.push(Month::February, Entry::new("b", "2"), Category::default());
        agg.push(Month::July, Entry::new("c", "3"), Category::default());

        let months: Vec<_> = agg.months().collect();
        assert_eq!(months, vec![Month::February, Month::July, Month::November]);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut a = Aggregate::new();
        a.push(Month::May, Entry::new("first", "1"), Category::new("x"));

        let mut b = Aggregate::new();
        b.push(Month::May, Entry::new("second", "2"), Category::new("y"));
        b.push(Month::June, Entry::new("third", "3"), Category::new("z"));

        a.extend(b);

        let items: Vec<_> = a
            .get(Month::May)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.item.as_str())
            .collect();
        assert_eq!(items, vec!["first", "second"]);
        assert_eq!(a.total_entries(), 3);
        for (_, bucket) in a.iter() {
            assert_eq!(bucket.entries().len(), bucket.categories().len());
        }
    }

    #[test]
    fn test_serializes_keyed_by_month_name() {
        let mut agg = Aggregate::new();
        agg.push(Month::May, Entry::new("Coffee Shop", "4.50"), Category::new("Dining"));
        let v = serde_json::to_value(&agg).unwrap();
        assert_eq!(v["May"]["entries"][0]["item"], "Coffee Shop");
        assert_eq!(v["May"]["categories"][0], "Dining");
    }
}

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::record::Record;

/// Per-category sums kept in order of each category's first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

/// How record amounts contribute to [`CategoryTotals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySign {
    /// Income and expense amounts are added as-is.
    Unsigned,
    /// Expenses count against their category.
    Signed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub by_category: CategoryTotals,
}

impl Summary {
    pub(crate) fn from_records<'a>(
        records: impl IntoIterator<Item = &'a Record>,
        sign: CategorySign,
    ) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut by_category = CategoryTotals::default();

        for record in records {
            let amount = record.amount();
            if record.is_income() {
                total_income += amount;
            } else {
                total_expense += amount;
            }
            let contribution = match sign {
                CategorySign::Signed if !record.is_income() => -amount,
                _ => amount,
            };
            by_category.add(record.category(), contribution);
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_totals_keep_first_seen_order() {
        let mut totals = CategoryTotals::default();
        totals.add("rent", 900.0);
        totals.add("food", 20.0);
        totals.add("rent", 100.0);
        let order: Vec<_> = totals.iter().collect();
        assert_eq!(order, vec![("rent", 1000.0), ("food", 20.0)]);
    }

    #[test]
    fn category_totals_serialize_as_ordered_map() {
        let mut totals = CategoryTotals::default();
        totals.add("zoo", 1.0);
        totals.add("apple", 2.0);
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"{"zoo":1.0,"apple":2.0}"#);
    }
}

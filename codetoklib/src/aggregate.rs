//! Grouping of per-file records into the four fixed categories.

use std::collections::BTreeMap;

use crate::registry::Category;
use crate::stats::{CategoryStats, FileRecord};

/// Partition records into the four fixed categories by extension lookup
/// and sum per-category totals.
///
/// The partition is exhaustive and disjoint: every record lands in exactly
/// one category, and all four categories are always present in the result,
/// empty or not. Input order is preserved within each category; the sums
/// are order-insensitive.
pub fn aggregate(records: Vec<FileRecord>) -> BTreeMap<Category, CategoryStats> {
    let mut buckets: BTreeMap<Category, Vec<FileRecord>> = Category::ALL
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();

    for record in records {
        let category = crate::registry::category_of(&record.extension);
        buckets
            .get_mut(&category)
            .expect("all categories pre-seeded")
            .push(record);
    }

    buckets
        .into_iter()
        .map(|(category, files)| (category, CategoryStats::new(category, files)))
        .collect()
}

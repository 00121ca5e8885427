//! Grouping of directory entries into timezone buckets, in UTC order.

use crate::{TimezoneCatalog, UserRecord, parse_utc_offset};

use std::collections::HashMap;

/// Bucket label for entries without a timezone
pub const NOT_SET_BUCKET: &str = "Not Set";

/// Sort key of a bucket.
///
/// Variant order is the bucket order: every parseable offset ascending, then
/// labels that don't parse, then the `Not Set` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimezoneKey {
    Offset(i32),
    Unsortable,
    NotSet,
}

impl TimezoneKey {
    /// Catalog values use the catalog's offset; other labels are parsed.
    pub fn for_label(label: &str) -> Self {
        if label == NOT_SET_BUCKET {
            return Self::NotSet;
        }
        TimezoneCatalog::find(label)
            .map(|tz| tz.offset_minutes)
            .or_else(|| parse_utc_offset(label))
            .map_or(Self::Unsortable, Self::Offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneGroup {
    pub label: String,
    pub members: Vec<UserRecord>,
}

impl TimezoneGroup {
    pub fn sort_key(&self) -> TimezoneKey {
        TimezoneKey::for_label(&self.label)
    }
}

/// Bucket `records` by timezone and order the buckets by UTC offset.
///
/// Members keep the order they arrive in. Buckets with equal keys keep the
/// order in which they were first seen.
pub fn group_by_timezone(records: Vec<UserRecord>) -> Vec<TimezoneGroup> {
    let mut groups: Vec<TimezoneGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = record
            .timezone
            .clone()
            .unwrap_or_else(|| NOT_SET_BUCKET.to_string());

        match index.get(&label) {
            Some(&i) => groups[i].members.push(record),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(TimezoneGroup {
                    label,
                    members: vec![record],
                });
            }
        }
    }

    // stable
    groups.sort_by_key(TimezoneGroup::sort_key);
    groups
}

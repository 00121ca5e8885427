use crate::{DbError, DirectoryStore, Result as DbErrorResult};

use tzd_core::{LanguageListing, TimezoneGroup, group_by_timezone};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;

/// Read-only views over the directory used by the operator commands.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn DirectoryStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Operators bucketed by timezone, buckets in UTC-offset order.
    ///
    /// With a filter only the exact timezone is returned (at most one bucket).
    pub async fn list_operators(
        &self,
        timezone_filter: Option<&str>,
    ) -> DbErrorResult<Vec<TimezoneGroup>> {
        let timezone_filter = timezone_filter.filter(|tz| !tz.trim().is_empty());

        let operators = self.store.find_operators(timezone_filter).await?;
        debug!(
            "list_operators(filter={:?}) matched {} rows",
            timezone_filter,
            operators.len()
        );

        Ok(group_by_timezone(operators))
    }

    /// Everyone whose languages contain `language_filter`, operators first.
    ///
    /// There is no "list everything" mode: an absent or blank filter is
    /// [`DbError::MissingFilter`] and the store is not touched.
    pub async fn list_by_language(
        &self,
        language_filter: Option<&str>,
    ) -> DbErrorResult<LanguageListing> {
        let language = language_filter
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| DbError::MissingFilter {
                filter: "language",
                location: ErrorLocation::from(Location::caller()),
            })?;

        let records = self.store.find_by_language(language).await?;
        debug!(
            "list_by_language({:?}) matched {} rows",
            language,
            records.len()
        );

        Ok(LanguageListing::from_records(records))
    }
}

//! Parameter builder.
//!
//! Turns typed call arguments into call parameters. Each operation takes a
//! parameter set by reference and returns a new one, so a set shared between
//! calls is never modified.
//!
//! Normalization rules shared by every list operation:
//!
//! - `Limit` below 1 becomes [`DEFAULT_LIMIT`], `Offset` below 0 becomes 0
//! - an unknown sort field becomes `created_at`, an unknown direction `ASC`
//! - a single status filter is validated strictly, while the composite
//!   filter path drops an unknown status without failing

use chrono::NaiveDateTime;
use std::fmt;

use super::{ParamValue, ParameterSet};
use crate::application::error::SellerCenterError;
use crate::domain::OrderStatus;

/// Page size used when the caller asks for fewer than one record.
pub const DEFAULT_LIMIT: i64 = 1000;

/// Offset used when the caller passes a negative one.
pub const DEFAULT_OFFSET: i64 = 0;

/// Wire format for date bounds: no offset, no fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a date bound for the wire.
///
/// The value is written as given; callers that need UTC pass a UTC wall time
/// (`Utc::now().naive_utc()`).
#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Fields orders can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Creation time.
    #[default]
    CreatedAt,
    /// Last update time.
    UpdatedAt,
}

impl SortField {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Parse a wire value, falling back to `created_at` for anything unknown.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "updated_at" => Self::UpdatedAt,
            _ => Self::CreatedAt,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

impl SortDirection {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Parse a wire value, falling back to `ASC` for anything unknown.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "DESC" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which timestamp a date range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFacet {
    /// `CreatedAfter` / `CreatedBefore`.
    Created,
    /// `UpdatedAfter` / `UpdatedBefore`.
    Updated,
}

impl DateFacet {
    const fn after_key(self) -> &'static str {
        match self {
            Self::Created => "CreatedAfter",
            Self::Updated => "UpdatedAfter",
        }
    }

    const fn before_key(self) -> &'static str {
        match self {
            Self::Created => "CreatedBefore",
            Self::Updated => "UpdatedBefore",
        }
    }
}

/// Pagination and sorting for list calls, as supplied by the caller.
///
/// Values are kept raw and normalized when the parameters are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Page size.
    pub limit: i64,
    /// Records to skip.
    pub offset: i64,
    /// Sort field name.
    pub sort_by: String,
    /// Sort direction name.
    pub sort_direction: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            sort_by: SortField::default().as_str().to_string(),
            sort_direction: SortDirection::default().as_str().to_string(),
        }
    }
}

impl ListOptions {
    /// Defaults: 1000 records from offset 0, oldest first by creation time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    #[must_use]
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the offset.
    #[must_use]
    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sort by a known field and direction.
    #[must_use]
    pub fn sorted(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = field.as_str().to_string();
        self.sort_direction = direction.as_str().to_string();
        self
    }

    /// Sort by raw names; unknown names fall back to the defaults.
    #[must_use]
    pub fn sorted_raw(mut self, sort_by: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self.sort_direction = direction.into();
        self
    }
}

/// Composite order filters for `GetOrders`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilters {
    /// Lower bound on creation time.
    pub created_after: Option<NaiveDateTime>,
    /// Upper bound on creation time.
    pub created_before: Option<NaiveDateTime>,
    /// Lower bound on update time.
    pub updated_after: Option<NaiveDateTime>,
    /// Upper bound on update time.
    pub updated_before: Option<NaiveDateTime>,
    /// Status name. An unknown name is dropped, not rejected.
    pub status: Option<String>,
}

impl OrderFilters {
    /// No filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders created in `[after, before]`.
    #[must_use]
    pub const fn created_between(mut self, after: NaiveDateTime, before: NaiveDateTime) -> Self {
        self.created_after = Some(after);
        self.created_before = Some(before);
        self
    }

    /// Orders updated in `[after, before]`.
    #[must_use]
    pub const fn updated_between(mut self, after: NaiveDateTime, before: NaiveDateTime) -> Self {
        self.updated_after = Some(after);
        self.updated_before = Some(before);
        self
    }

    /// Filter on a status name.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl ParameterSet {
    /// Add `Limit` and `Offset`, normalizing out-of-range values.
    #[must_use]
    pub fn with_pagination(&self, limit: i64, offset: i64) -> Self {
        let limit = if limit < 1 { DEFAULT_LIMIT } else { limit };
        let offset = if offset < 0 { DEFAULT_OFFSET } else { offset };
        self.with("Limit", limit).with("Offset", offset)
    }

    /// Add `SortBy` and `SortDirection`, replacing unknown names with defaults.
    #[must_use]
    pub fn with_sort(&self, sort_by: &str, sort_direction: &str) -> Self {
        self.with("SortBy", SortField::parse_or_default(sort_by).as_str())
            .with(
                "SortDirection",
                SortDirection::parse_or_default(sort_direction).as_str(),
            )
    }

    /// Add pagination and sorting from `options`.
    #[must_use]
    pub fn with_list_options(&self, options: &ListOptions) -> Self {
        self.with_pagination(options.limit, options.offset)
            .with_sort(&options.sort_by, &options.sort_direction)
    }

    /// Add the bounds of a date range that were provided.
    #[must_use]
    pub fn with_date_range(
        &self,
        facet: DateFacet,
        after: Option<NaiveDateTime>,
        before: Option<NaiveDateTime>,
    ) -> Self {
        let mut next = self.clone();
        if let Some(after) = after {
            next.insert(facet.after_key(), format_timestamp(&after));
        }
        if let Some(before) = before {
            next.insert(facet.before_key(), format_timestamp(&before));
        }
        next
    }

    /// Add `Status`, rejecting values outside the order status enumeration.
    pub fn with_status(&self, status: &str) -> Result<Self, SellerCenterError> {
        let status: OrderStatus = status.parse()?;
        Ok(self.with("Status", status.as_str()))
    }

    /// Add every filter that is set.
    ///
    /// Unlike [`ParameterSet::with_status`], an unknown status is silently
    /// left out here.
    #[must_use]
    pub fn with_filters(&self, filters: &OrderFilters) -> Self {
        let next = self
            .with_date_range(
                DateFacet::Created,
                filters.created_after,
                filters.created_before,
            )
            .with_date_range(
                DateFacet::Updated,
                filters.updated_after,
                filters.updated_before,
            );

        match filters.status.as_deref().map(str::parse::<OrderStatus>) {
            Some(Ok(status)) => next.with("Status", status.as_str()),
            Some(Err(err)) => {
                tracing::debug!(value = %err.value, "Ignoring unknown status filter");
                next
            }
            None => next,
        }
    }

    /// Add `ids` under `key` as a compact JSON array.
    pub fn with_item_id_list<I>(&self, key: &'static str, ids: I) -> Result<Self, SellerCenterError>
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        let ids: Vec<u64> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(SellerCenterError::EmptyArgument { argument: key });
        }
        let json = serde_json::Value::from(ids).to_string();
        Ok(self.with(key, ParamValue::Json(json)))
    }
}

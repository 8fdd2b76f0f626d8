//! Query builder utilities
//!
//! This module provides Flux pipeline construction utilities.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::filter_builder::FilterBuilder;
use crate::query_builder::aggregation::{Aggregate, Elapsed};
use crate::query_builder::formatting::{format_timestamp, quote_columns};
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;

/// Separator placed between pipeline stages
pub const PIPE_FORWARD: &str = " |> ";

/// Query builder for constructing Flux pipelines
///
/// Every method formats one stage and appends it; stages are emitted in
/// call order and nothing is checked across stages.
#[derive(Debug, Clone, Default)]
pub struct FluxQueryBuilder {
    stages: Vec<String>,
}

impl FluxQueryBuilder {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a pre-formatted stage
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stages.push(stage.into());
        self
    }

    pub fn from(self, bucket: &str) -> Self {
        self.stage(format!("from(bucket: \"{}\")", bucket))
    }

    /// Add a time range; `stop` is omitted when `None`
    pub fn range<Tz>(self, start: DateTime<Tz>, stop: Option<DateTime<Tz>>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut args = vec![format!("start: {}", format_timestamp(&start))];

        if let Some(stop) = stop {
            args.push(format!("stop: {}", format_timestamp(&stop)));
        }

        self.stage(format!("range({})", args.join(", ")))
    }

    /// Add a filter stage around a predicate body
    pub fn filter(self, predicate: &str) -> Self {
        self.stage(format!("filter(fn: (r) => {})", predicate))
    }

    /// Add a filter stage using the rendered output of a predicate builder
    pub fn filter_by(self, filter: &FilterBuilder) -> Self {
        self.filter(&filter.build())
    }

    pub fn group_by<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(format!("group(columns: {})", quote_columns(columns)))
    }

    /// Add a map stage; `record` is the body of the returned record
    pub fn map(self, record: &str) -> Self {
        self.stage(format!("map(fn: (r) => ({{{}}}))", record))
    }

    pub fn truncate_time_column(self, seconds: u64) -> Self {
        self.stage(format!("truncateTimeColumn(unit: {}s)", seconds))
    }

    pub fn select<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(format!("select(columns: {})", quote_columns(columns)))
    }

    pub fn keep<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(format!("keep(columns: {})", quote_columns(columns)))
    }

    pub fn drop<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(format!("drop(columns: {})", quote_columns(columns)))
    }

    /// Rename columns, keeping the order of `mapping`
    pub fn rename<I, K, V>(self, mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let renames = mapping
            .into_iter()
            .map(|(from, to)| format!("{}: \"{}\"", from.as_ref(), to.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");

        self.stage(format!("rename(columns: {{{}}})", renames))
    }

    pub fn sort<I, S>(self, order: SortOrder, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stage(format!(
            "sort(columns: {}, desc: {})",
            quote_columns(columns),
            order.to_flux()
        ))
    }

    pub fn pivot(self, row_key: &str, column_key: &str, value_column: &str) -> Self {
        self.stage(format!(
            "pivot(rowKey: [\"{}\"], columnKey: [\"{}\"], valueColumn: \"{}\")",
            row_key, column_key, value_column
        ))
    }

    pub fn aggregate(self, aggregate: Aggregate) -> Self {
        self.stage(aggregate.to_flux())
    }

    /// Sum over `column`, or over `_value` when `None`
    pub fn sum(self, column: Option<&str>) -> Self {
        self.aggregate(match column {
            Some(column) => Aggregate::sum_of(column),
            None => Aggregate::sum(),
        })
    }

    pub fn mean(self) -> Self {
        self.aggregate(Aggregate::Mean)
    }

    pub fn median(self) -> Self {
        self.aggregate(Aggregate::Median)
    }

    pub fn min(self) -> Self {
        self.aggregate(Aggregate::Min)
    }

    pub fn max(self) -> Self {
        self.aggregate(Aggregate::Max)
    }

    /// Limit the number of records returned
    pub fn limit(self, n: i64, offset: Option<i64>) -> Self {
        let pagination = Pagination::new(n);
        self.paginate(match offset {
            Some(offset) => pagination.with_offset(offset),
            None => pagination,
        })
    }

    pub fn paginate(self, pagination: Pagination) -> Self {
        self.stage(pagination.to_flux())
    }

    pub fn elapsed(self, elapsed: Elapsed) -> Self {
        self.stage(elapsed.to_flux())
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Build the Flux query
    pub fn build(&self) -> String {
        tracing::trace!(stages = self.stages.len(), "building flux query");
        self.stages.join(PIPE_FORWARD)
    }
}

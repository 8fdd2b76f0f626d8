use chrono::{TimeZone, Utc};

use crate::filter_builder::FilterBuilder;
use crate::query_builder::{Aggregate, Elapsed, FluxQueryBuilder, Pagination, SortOrder};

// ========================================
// Pipelines
// ========================================

#[test]
fn test_basic_query() {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

    let query = FluxQueryBuilder::new()
        .from("mybucket")
        .range(start, None)
        .filter(r#"r._measurement == "mymeasurement""#)
        .group_by(["phase"])
        .build();

    assert_eq!(
        query,
        r#"from(bucket: "mybucket") |> range(start: 2022-01-01T00:00:00Z) |> filter(fn: (r) => r._measurement == "mymeasurement") |> group(columns: ["phase"])"#
    );
}

#[test]
fn test_complex_query() {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

    let query = FluxQueryBuilder::new()
        .from("mybucket")
        .range(start, None)
        .filter(r#"r._measurement == "mymeasurement""#)
        .rename([("old_col", "new_col")])
        .pivot("row_key", "column_key", "value_column")
        .sum(None)
        .limit(10, None)
        .build();

    assert_eq!(
        query,
        r#"from(bucket: "mybucket") |> range(start: 2022-01-01T00:00:00Z) |> filter(fn: (r) => r._measurement == "mymeasurement") |> rename(columns: {old_col: "new_col"}) |> pivot(rowKey: ["row_key"], columnKey: ["column_key"], valueColumn: "value_column") |> sum() |> limit(n: 10)"#
    );
}

#[test]
fn test_filter_by_predicate_builder() {
    let predicate = FilterBuilder::new().add_comparison("field1", "value1");
    let query = FluxQueryBuilder::new()
        .from("metrics")
        .filter_by(&predicate)
        .build();

    assert!(query.contains(r#"filter(fn: (r) => r.field1 == "value1")"#));
    assert_eq!(
        query,
        FluxQueryBuilder::new()
            .from("metrics")
            .filter(&predicate.build())
            .build()
    );
}

#[test]
fn test_empty_builder() {
    let builder = FluxQueryBuilder::new();
    assert!(builder.is_empty());
    assert_eq!(builder.build(), "");
}

#[test]
fn test_single_stage_has_no_separator() {
    let query = FluxQueryBuilder::new().from("only").build();
    assert_eq!(query, r#"from(bucket: "only")"#);
}

#[test]
fn test_stages_keep_call_order() {
    let builder = FluxQueryBuilder::new().mean().from("b").max();
    assert_eq!(builder.len(), 3);
    assert_eq!(builder.stages(), ["mean()", r#"from(bucket: "b")"#, "max()"]);
    assert_eq!(builder.build(), r#"mean() |> from(bucket: "b") |> max()"#);
}

// ========================================
// Stage formatting
// ========================================

#[test]
fn test_range_with_stop() {
    let start = Utc.with_ymd_and_hms(2023, 3, 1, 8, 0, 0).unwrap();
    let stop = Utc.with_ymd_and_hms(2023, 3, 2, 8, 0, 0).unwrap();

    let query = FluxQueryBuilder::new().range(start, Some(stop)).build();
    assert_eq!(
        query,
        "range(start: 2023-03-01T08:00:00Z, stop: 2023-03-02T08:00:00Z)"
    );
}

#[test]
fn test_column_stages() {
    let query = FluxQueryBuilder::new()
        .group_by(vec!["host", "region"])
        .select(["_time", "_value"])
        .keep(vec!["_time".to_string()])
        .drop(["_start", "_stop"])
        .build();

    assert_eq!(
        query,
        r#"group(columns: ["host", "region"]) |> select(columns: ["_time", "_value"]) |> keep(columns: ["_time"]) |> drop(columns: ["_start", "_stop"])"#
    );
}

#[test]
fn test_empty_column_list_is_passed_through() {
    let query = FluxQueryBuilder::new().group_by(Vec::<&str>::new()).build();
    assert_eq!(query, "group(columns: [])");
}

#[test]
fn test_map_and_truncate() {
    let query = FluxQueryBuilder::new()
        .truncate_time_column(60)
        .map(r#"r with _value: r._value * 2.0"#)
        .build();

    assert_eq!(
        query,
        "truncateTimeColumn(unit: 60s) |> map(fn: (r) => ({r with _value: r._value * 2.0}))"
    );
}

#[test]
fn test_rename_keeps_mapping_order() {
    let query = FluxQueryBuilder::new()
        .rename(vec![("b", "beta"), ("a", "alpha")])
        .build();
    assert_eq!(query, r#"rename(columns: {b: "beta", a: "alpha"})"#);
}

#[test]
fn test_sort() {
    let query = FluxQueryBuilder::new()
        .sort(SortOrder::Desc, ["_value"])
        .sort(SortOrder::Asc, ["_time", "host"])
        .build();

    assert_eq!(
        query,
        r#"sort(columns: ["_value"], desc: true) |> sort(columns: ["_time", "host"], desc: false)"#
    );
}

#[test]
fn test_aggregates() {
    let query = FluxQueryBuilder::new()
        .sum(Some("bytes"))
        .mean()
        .median()
        .min()
        .max()
        .aggregate(Aggregate::sum())
        .build();

    assert_eq!(
        query,
        r#"sum(column: "bytes") |> mean() |> median() |> min() |> max() |> sum()"#
    );
}

#[test]
fn test_limit_and_paginate() {
    let query = FluxQueryBuilder::new()
        .limit(10, Some(20))
        .paginate(Pagination::new(5))
        .build();
    assert_eq!(query, "limit(n: 10, offset: 20) |> limit(n: 5)");
}

#[test]
fn test_elapsed() {
    let query = FluxQueryBuilder::new()
        .elapsed(Elapsed::new().with_unit("1s"))
        .elapsed(Elapsed::new().with_column_name("gap"))
        .build();
    assert_eq!(query, r#"elapsed(unit: 1s) |> elapsed(columnName: "gap")"#);
}

#[test]
fn test_custom_stage() {
    let query = FluxQueryBuilder::new()
        .from("b")
        .stage("yield(name: \"out\")")
        .build();
    assert_eq!(query, r#"from(bucket: "b") |> yield(name: "out")"#);
}

#[test]
fn test_build_is_idempotent() {
    let builder = FluxQueryBuilder::new().from("b").mean();
    assert_eq!(builder.build(), builder.build());
}

use super::parse;
use sql_syntax::{
    ast::{
        expr::ExprKind,
        partition::{PartitionBound, PartitionStrategy},
    },
    dialect::DbType,
};

#[test]
fn test_partition_by_range() {
    let stmt = parse(
        "CREATE TABLE measurement (city_id INT NOT NULL, logdate DATE NOT NULL) PARTITION BY RANGE (logdate)",
        DbType::PostgreSql,
    )
    .unwrap();

    let by = stmt.partitioning().unwrap();
    assert_eq!(by.strategy, PartitionStrategy::Range);
    assert_eq!(by.columns.len(), 1);
    assert!(stmt.partition_of().is_none());
}

#[test]
fn test_partition_of_range_bound() {
    let stmt = parse(
        "CREATE TABLE measurement_y2024 PARTITION OF measurement FOR VALUES FROM ('2024-01-01') TO ('2025-01-01')",
        DbType::PostgreSql,
    )
    .unwrap();

    let of = stmt.partition_of().unwrap();
    assert_eq!(of.parent.to_string(), "measurement");
    assert!(of.elements.is_empty());
    assert!(matches!(of.bound, PartitionBound::Range { .. }));
    assert!(stmt.partitioning().is_none());
}

#[test]
fn test_partition_of_with_elements_and_list_bound() {
    let stmt = parse(
        "CREATE TABLE orders_eu PARTITION OF orders (status DEFAULT 'new', PRIMARY KEY (id)) FOR VALUES IN ('de', 'fr')",
        DbType::PostgreSql,
    )
    .unwrap();

    let of = stmt.partition_of().unwrap();
    assert_eq!(of.elements.len(), 2);
    let PartitionBound::In(values) = &of.bound else {
        panic!("expected IN bound");
    };
    assert_eq!(values.len(), 2);
}

#[test]
fn test_partition_of_hash_and_default() {
    let stmt = parse(
        "CREATE TABLE p0 PARTITION OF t FOR VALUES WITH (MODULUS 4, REMAINDER 0)",
        DbType::PostgreSql,
    )
    .unwrap();
    assert!(matches!(
        stmt.partition_of().unwrap().bound,
        PartitionBound::Hash { .. }
    ));

    let stmt = parse("CREATE TABLE p_default PARTITION OF t DEFAULT", DbType::PostgreSql).unwrap();
    assert_eq!(stmt.partition_of().unwrap().bound, PartitionBound::Default);
}

#[test]
fn test_with_options_keep_duplicates_in_order() {
    let stmt = parse(
        "CREATE TABLE t (a INT) WITH (fillfactor = 70, autovacuum_enabled = off, toast.autovacuum_enabled = true, fillfactor = 80,) TABLESPACE fast",
        DbType::PostgreSql,
    )
    .unwrap();

    let names: Vec<_> = stmt.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "fillfactor",
            "autovacuum_enabled",
            "toast.autovacuum_enabled",
            "fillfactor"
        ]
    );
    assert!(matches!(stmt.options[1].value.kind, ExprKind::Identifier(_)));
    assert_eq!(stmt.tablespace.unwrap().to_string(), "fast");
}

#[test]
fn test_with_options_ignored_by_generic() {
    assert!(parse("CREATE TABLE t (a INT) WITH (fillfactor=70)", DbType::Generic).is_err());
}

#[test]
fn test_round_trip() {
    let sql = "CREATE TABLE t (a INT, b TEXT[]) INHERITS (base) WITH (fillfactor = 70) TABLESPACE ts PARTITION BY LIST (b)";
    let stmt = parse(sql, DbType::PostgreSql).unwrap();

    assert_eq!(stmt.to_string(), sql);
}

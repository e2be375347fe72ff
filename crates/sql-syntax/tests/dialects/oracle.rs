use super::parse;
use sql_syntax::{
    ast::{
        create_table::TableElement,
        select::{RowLimitStyle, SelectQuery},
        supplemental::{SupplementalLogData, SupplementalLoggingKind},
    },
    dialect::DbType,
};

#[test]
fn test_supplemental_log_data() {
    let stmt = parse(
        "CREATE TABLE emp (id NUMBER(10), SUPPLEMENTAL LOG DATA (PRIMARY KEY, UNIQUE INDEX) COLUMNS)",
        DbType::Oracle,
    )
    .unwrap();

    assert_eq!(stmt.elements.len(), 2);
    let TableElement::SupplementalLogging(props) = &stmt.elements[1] else {
        panic!("expected supplemental logging element");
    };
    assert_eq!(
        props.kind,
        SupplementalLoggingKind::Data(vec![
            SupplementalLogData::PrimaryKey,
            SupplementalLogData::Unique,
        ])
    );
}

#[test]
fn test_supplemental_log_group() {
    let stmt = parse(
        "CREATE TABLE emp (id NUMBER, name VARCHAR2(50 BYTE), SUPPLEMENTAL LOG GROUP emp_grp (id, name) ALWAYS)",
        DbType::Oracle,
    )
    .unwrap();

    let TableElement::SupplementalLogging(props) = &stmt.elements[2] else {
        panic!("expected supplemental logging element");
    };
    match &props.kind {
        SupplementalLoggingKind::Group {
            name,
            columns,
            always,
        } => {
            assert_eq!(name.value, "emp_grp");
            assert_eq!(columns.len(), 2);
            assert!(always);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(
        props.to_string(),
        "SUPPLEMENTAL LOG GROUP emp_grp (id, name) ALWAYS"
    );
}

#[test]
fn test_supplemental_is_a_column_elsewhere() {
    let stmt = parse("CREATE TABLE t (supplemental INT)", DbType::Generic).unwrap();

    assert!(matches!(stmt.elements[0], TableElement::Column(_)));
}

#[test]
fn test_fetch_style_select() {
    let stmt = parse(
        "CREATE TABLE recent AS SELECT * FROM orders ORDER BY placed_at DESC FETCH FIRST 100 ROWS ONLY",
        DbType::Oracle,
    )
    .unwrap();

    let Some(SelectQuery::Select(select)) = &stmt.select else {
        panic!("expected select");
    };
    let limit = select.limit.as_ref().unwrap();
    assert_eq!(limit.style, RowLimitStyle::Fetch);
    assert!(limit.offset.is_none());
}

#[test]
fn test_global_temporary_table() {
    let stmt = parse(
        "CREATE GLOBAL TEMPORARY TABLE session_data (id NUMBER) TABLESPACE temp_ts",
        DbType::Oracle,
    )
    .unwrap();

    assert_eq!(stmt.db_type, DbType::Oracle);
    assert_eq!(stmt.tablespace.unwrap().to_string(), "temp_ts");
}

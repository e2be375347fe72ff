use super::parse;
use sql_syntax::dialect::DbType;

#[test]
fn test_trailing_with_options() {
    let stmt = parse(
        "CREATE TABLE [dbo].[Orders] ([Id] INT NOT NULL, [Note] NVARCHAR(MAX),) WITH (DATA_COMPRESSION = PAGE, MEMORY_OPTIMIZED = ON)",
        DbType::SqlServer,
    )
    .unwrap();

    assert_eq!(stmt.name.to_string(), "[dbo].[Orders]");
    assert_eq!(stmt.elements.len(), 2);
    assert_eq!(stmt.options.len(), 2);
    assert_eq!(stmt.options[1].name, "MEMORY_OPTIMIZED");
    assert_eq!(stmt.options[1].value.to_string(), "ON");
}

#[test]
fn test_round_trip() {
    let sql = "CREATE TABLE t (a INT) WITH (DATA_COMPRESSION = ROW)";
    let stmt = parse(sql, DbType::SqlServer).unwrap();

    assert_eq!(stmt.to_string(), sql);
}

use super::parse;
use sql_syntax::{ast::column::ColumnOption, dialect::DbType};

#[test]
fn test_table_options() {
    let stmt = parse(
        "CREATE TABLE `users` (`id` INT UNSIGNED NOT NULL AUTO_INCREMENT COMMENT 'pk', PRIMARY KEY (`id`)) \
         ENGINE=InnoDB AUTO_INCREMENT=100 DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci COMMENT='accounts';",
        DbType::MySql,
    )
    .unwrap();

    let names: Vec<_> = stmt.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["ENGINE", "AUTO_INCREMENT", "CHARSET", "COLLATE", "COMMENT"]
    );

    let id = stmt.columns().next().unwrap();
    assert_eq!(id.data_type.as_ref().unwrap().to_string(), "INT UNSIGNED");
    assert!(id.has_option(&ColumnOption::AutoIncrement));
}

#[test]
fn test_character_set_spelling() {
    let stmt = parse(
        "CREATE TABLE t (a INT) ENGINE = MyISAM, CHARACTER SET = latin1",
        DbType::MySql,
    )
    .unwrap();

    assert_eq!(stmt.options[1].name, "CHARSET");
    assert_eq!(stmt.options[1].value.to_string(), "latin1");
}

#[test]
fn test_round_trip() {
    let sql = "CREATE TABLE t (a INT) ENGINE=InnoDB CHARSET=utf8mb4";
    let stmt = parse(sql, DbType::MySql).unwrap();

    assert_eq!(stmt.to_string(), sql);
}

#[test]
fn test_dangling_default() {
    assert!(parse("CREATE TABLE t (a INT) DEFAULT ENGINE=InnoDB", DbType::MySql).is_err());
}

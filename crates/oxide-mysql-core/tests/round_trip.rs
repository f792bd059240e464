//! Rendering tests: every statement renders to canonical SQL that parses
//! back to an equal AST.

mod common;
use common::*;

use oxide_mysql_core::ast::{
    ColumnConstraint, ColumnDef, CreateTableStatement, DataType, Expr, Literal, Projection,
    SelectStatement, Statement, TableName, TableRef,
};

#[test]
fn canonical_select_rendering() {
    let stmt = parse(
        "select ID, NAME, AGE from DB1.TB1 as t1, TB2 t2 where AGE > 20 \
         order by AGE desc, ID limit 2, 10;",
    );
    assert_eq!(
        stmt.to_string(),
        "SELECT ID, NAME, AGE FROM DB1.TB1 AS t1, TB2 AS t2 WHERE AGE > 20 \
         ORDER BY AGE DESC, ID ASC LIMIT 10 OFFSET 2"
    );
}

#[test]
fn canonical_insert_rendering() {
    let stmt = parse("INSERT INTO a.TB1 (NAME,AGE,FLAG) VALUES('ZHANG_SAN', 20, true);");
    assert_eq!(
        stmt.to_string(),
        "INSERT INTO a.TB1 (NAME, AGE, FLAG) VALUES ('ZHANG_SAN', 20, TRUE)"
    );
}

#[test]
fn canonical_create_rendering() {
    let stmt = parse(
        "create table if not exists TB1 (ID int primary key auto_increment, \
         NAME varchar(20) not null comment '姓名', primary key (ID))",
    );
    assert_eq!(
        stmt.to_string(),
        "CREATE TABLE IF NOT EXISTS TB1 (ID INT PRIMARY KEY AUTO_INCREMENT, \
         NAME VARCHAR(20) NOT NULL COMMENT '姓名', PRIMARY KEY (ID))"
    );
}

#[test]
fn not_equal_renders_as_angle_brackets() {
    assert_eq!(
        parse("DELETE FROM t WHERE a != 1").to_string(),
        "DELETE FROM t WHERE a <> 1"
    );
}

#[test]
fn keyword_identifiers_are_quoted() {
    let stmt = parse("SELECT `select`, `a b`, `x``y` FROM `order` WHERE `true` = TRUE");
    assert_eq!(
        stmt.to_string(),
        "SELECT `select`, `a b`, `x``y` FROM `order` WHERE `true` = TRUE"
    );
}

#[test]
fn round_trip_statement_shapes() {
    let statements = [
        "SELECT * FROM t",
        "SELECT a AS b FROM s.t AS x WHERE x.a >= -2.5 ORDER BY x.a DESC LIMIT 1",
        "SELECT a FROM t WHERE 'it''s' = b",
        r"SELECT a FROM t WHERE b = 'back\\slash'",
        "INSERT INTO t (a, b) VALUES (NULL, FALSE), (-1, 'x')",
        "UPDATE t SET a = 1.0, b = 'z' WHERE c < 3",
        "DELETE FROM t",
        "CREATE TABLE t (a DECIMAL(10, 2) DEFAULT 0.00 NULL UNIQUE, b TEXT COMMENT 'c')",
        "CREATE TABLE t (a INT, b INT, UNIQUE KEY (a, b))",
        "ALTER TABLE t ADD c VARCHAR(3) DEFAULT 'n'",
        "ALTER TABLE t DROP COLUMN `key`",
        "DROP TABLE IF EXISTS a, b",
        "TRUNCATE t",
    ];
    for sql in statements {
        round_trip(sql);
    }
}

#[test]
fn constructed_ast_round_trips() {
    let select = Statement::Select(SelectStatement {
        projection: Projection::Wildcard,
        from: vec![TableRef::with_schema("app", "limit").alias("l")],
        where_clause: Some(Expr::column("name").not_eq(Expr::string("a'b\\c"))),
        order_by: None,
        limit: Some(5),
        offset: None,
    });
    assert_eq!(
        select.to_string(),
        r"SELECT * FROM app.`limit` AS l WHERE name <> 'a''b\\c'"
    );
    assert_eq!(oxide_mysql_core::parse(&select.to_string()), Ok(select));

    let create = Statement::CreateTable(CreateTableStatement {
        if_not_exists: false,
        table: TableName::new("t"),
        columns: vec![ColumnDef::new("n", DataType::new("int"))
            .constraint(ColumnConstraint::NotNull)
            .constraint(ColumnConstraint::Default(Literal::Integer(-7)))],
        constraints: vec![],
    });
    assert_eq!(create.to_string(), "CREATE TABLE t (n INT NOT NULL DEFAULT -7)");
    assert_eq!(oxide_mysql_core::parse(&create.to_string()), Ok(create));

    let smallest = Statement::CreateTable(CreateTableStatement {
        if_not_exists: false,
        table: TableName::new("t"),
        columns: vec![ColumnDef::new("n", DataType::new("BIGINT"))
            .constraint(ColumnConstraint::Default(Literal::Integer(i64::MIN)))],
        constraints: vec![],
    });
    assert_eq!(
        smallest.to_string(),
        "CREATE TABLE t (n BIGINT DEFAULT -9223372036854775808)"
    );
    assert_eq!(oxide_mysql_core::parse(&smallest.to_string()), Ok(smallest));
}

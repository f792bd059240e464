//! Tests for statement summaries.

mod common;
use common::*;

use oxide_mysql_core::ast::{Literal, OrderDirection};
use oxide_mysql_core::summary::{FieldValue, StatementKind, StatementSummary, TableInfo};

fn summarize(sql: &str) -> StatementSummary {
    StatementSummary::from(&parse(sql))
}

#[test]
fn select_summary() {
    let s = summarize(
        "SELECT ID, NAME, AGE FROM DB1.TB1 as t1, TB2 as t2 \
         WHERE AGE > 20 ORDER BY AGE DESC, ID ASC LIMIT 10 OFFSET 2;",
    );
    assert_eq!(s.kind, StatementKind::Select);
    assert_eq!(
        s.tables,
        vec![
            TableInfo {
                index: 1,
                schema: Some(String::from("DB1")),
                table: String::from("TB1"),
                alias: Some(String::from("t1")),
            },
            TableInfo {
                index: 2,
                schema: None,
                table: String::from("TB2"),
                alias: Some(String::from("t2")),
            },
        ]
    );
    assert_eq!(s.select_fields, vec!["ID", "NAME", "AGE"]);
    assert_eq!(s.order_by[0].direction, OrderDirection::Desc);
    assert_eq!(s.order_by[1].column, "ID");
    assert_eq!((s.limit, s.offset), (Some(10), Some(2)));
    assert!(s.has_where);
    assert_eq!(
        s.to_string(),
        "kind: SELECT, tables: [table1: DB1.TB1, table2: TB2], \
         select_fields: [ID, NAME, AGE], set_fields: [], \
         order_by: [AGE DESC, ID ASC], limit: 10, offset: 2, where: true"
    );
}

#[test]
fn insert_summary() {
    let s = summarize("INSERT INTO a.TB1 (NAME,AGE,FLAG) VALUES('ZHANG_SAN', 20, true);");
    assert_eq!(s.kind, StatementKind::Insert);
    assert_eq!(s.tables.len(), 1);
    assert_eq!(s.tables[0].to_string(), "table1: a.TB1");
    assert_eq!(
        s.set_fields[2],
        FieldValue {
            column: String::from("FLAG"),
            value: Some(Literal::Boolean(true)),
        }
    );
    assert_eq!(
        s.to_string(),
        "kind: INSERT, tables: [table1: a.TB1], select_fields: [], \
         set_fields: [NAME='ZHANG_SAN', AGE=20, FLAG=TRUE], order_by: [], \
         limit: none, offset: none, where: false"
    );
}

#[test]
fn update_and_delete_summaries() {
    let u = summarize("UPDATE t SET a = 1, b = NULL WHERE id = 3");
    assert_eq!(u.set_fields.len(), 2);
    assert_eq!(u.set_fields[1].value, Some(Literal::Null));
    assert!(u.has_where);

    let d = summarize("DELETE FROM t");
    assert_eq!(d.kind, StatementKind::Delete);
    assert!(!d.has_where);
    assert!(d.set_fields.is_empty());
}

#[test]
fn create_table_summary_lists_declared_columns() {
    let s = summarize(
        "CREATE TABLE TB1 (ID INT PRIMARY KEY AUTO_INCREMENT, \
         NAME VARCHAR(20) NOT NULL COMMENT '姓名', AGE INT, FLAG BOOLEAN);",
    );
    let columns: Vec<_> = s.set_fields.iter().map(|f| f.column.as_str()).collect();
    assert_eq!(columns, vec!["ID", "NAME", "AGE", "FLAG"]);
    assert!(s.set_fields.iter().all(|f| f.value.is_none()));
}

#[test]
fn truncate_summary() {
    let s = StatementSummary::from(parse("TRUNCATE TABLE db.logs"));
    assert_eq!(s.kind.to_string(), "TRUNCATE TABLE");
    assert_eq!(s.tables[0].to_string(), "table1: db.logs");
}

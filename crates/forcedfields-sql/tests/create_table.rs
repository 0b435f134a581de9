use forcedfields_core::{
    schema::{FixedChar, FixedCharOptions, Timestamp, TimestampOptions},
    stmt::Value,
    Backend, Table,
};
use forcedfields_sql::{
    serializer::{Params, Placeholder},
    Serializer, Statement,
};
use jiff::civil::date;
use pretty_assertions::assert_eq;

struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &Value) -> Placeholder {
        Placeholder(0)
    }
}

fn serialize(table: &Table, backend: Backend) -> String {
    let stmt = Statement::create_table(table, &backend).unwrap();
    Serializer::for_backend(backend).serialize(&stmt, &mut NoParams)
}

fn records() -> Table {
    Table::new("records")
        .column(
            "code",
            FixedChar::new(FixedCharOptions {
                max_length: Some(4),
                null: true,
                ..Default::default()
            })
            .unwrap(),
        )
        .column(
            "created",
            Timestamp::new(TimestampOptions {
                auto_create: true,
                ..Default::default()
            })
            .unwrap(),
        )
        .column(
            "modified",
            Timestamp::new(TimestampOptions {
                auto_update: true,
                ..Default::default()
            })
            .unwrap(),
        )
        .column(
            "touched",
            Timestamp::new(TimestampOptions {
                auto_update_only: true,
                null: true,
                ..Default::default()
            })
            .unwrap(),
        )
}

#[test]
fn create_table_mysql() {
    assert_eq!(
        serialize(&records(), Backend::Mysql),
        "CREATE TABLE `records` (\n    \
         `code` CHAR(4) NULL,\n    \
         `created` TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL,\n    \
         `modified` TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP NOT NULL,\n    \
         `touched` TIMESTAMP ON UPDATE CURRENT_TIMESTAMP NULL\n);"
    );
}

#[test]
fn create_table_postgresql() {
    assert_eq!(
        serialize(&records(), Backend::Postgresql),
        "CREATE TABLE \"records\" (\n    \
         \"code\" CHAR(4) NULL,\n    \
         \"created\" TIMESTAMP WITHOUT TIME ZONE DEFAULT CURRENT_TIMESTAMP NOT NULL,\n    \
         \"modified\" TIMESTAMP WITHOUT TIME ZONE DEFAULT CURRENT_TIMESTAMP NOT NULL,\n    \
         \"touched\" TIMESTAMP WITHOUT TIME ZONE NULL\n);"
    );
}

#[test]
fn create_table_sqlite() {
    assert_eq!(
        serialize(&records(), Backend::Sqlite),
        "CREATE TABLE \"records\" (\n    \
         \"code\" CHAR(4) NULL,\n    \
         \"created\" DATETIME DEFAULT CURRENT_TIMESTAMP NOT NULL,\n    \
         \"modified\" DATETIME DEFAULT CURRENT_TIMESTAMP NOT NULL,\n    \
         \"touched\" DATETIME NULL\n);"
    );
}

#[test]
fn create_table_unrecognized_backend() {
    let table = Table::new("events").column(
        "at",
        Timestamp::new(TimestampOptions {
            default: Some(Value::DateTime(date(2017, 3, 9).at(8, 5, 1, 0))),
            ..Default::default()
        })
        .unwrap(),
    );

    assert_eq!(
        serialize(&table, Backend::Other("cockroachdb".to_string())),
        "CREATE TABLE \"events\" (\n    \"at\" DATETIME DEFAULT '2017-03-09 08:05:01' NOT NULL\n);"
    );
}

#[test]
fn null_default_is_emitted() {
    let table = Table::new("events").column(
        "at",
        Timestamp::new(TimestampOptions {
            default: Some(Value::Null),
            null: true,
            ..Default::default()
        })
        .unwrap(),
    );

    assert_eq!(
        serialize(&table, Backend::Postgresql),
        "CREATE TABLE \"events\" (\n    \"at\" TIMESTAMP WITHOUT TIME ZONE DEFAULT NULL NULL\n);"
    );
}

#[test]
fn add_column() {
    let table = records();
    let column = table.get("touched").unwrap();

    let stmt = Statement::add_column(&table, column, &Backend::Mysql);
    let sql = Serializer::mysql().serialize(&stmt, &mut NoParams);

    assert_eq!(
        sql,
        "ALTER TABLE `records` ADD COLUMN `touched` TIMESTAMP ON UPDATE CURRENT_TIMESTAMP NULL;"
    );
}

#[test]
fn identifiers_are_escaped() {
    let table = Table::new("we\"ird`name").column(
        "c",
        FixedChar::new(FixedCharOptions {
            max_length: Some(1),
            ..Default::default()
        })
        .unwrap(),
    );

    assert_eq!(
        serialize(&table, Backend::Sqlite),
        "CREATE TABLE \"we\"\"ird`name\" (\n    \"c\" CHAR(1) NOT NULL\n);"
    );
    assert_eq!(
        serialize(&table, Backend::Mysql),
        "CREATE TABLE `we\"ird``name` (\n    `c` CHAR(1) NOT NULL\n);"
    );
}

#[test]
fn table_without_columns_is_rejected() {
    let err = Statement::create_table(&Table::new("empty"), &Backend::Sqlite).unwrap_err();
    assert_eq!(err.to_string(), "table `empty` has no columns");
}

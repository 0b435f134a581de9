use forcedfields_core::{
    schema::{FixedChar, FixedCharOptions, NowStrategy, Timestamp, TimestampOptions},
    stmt::{Record, Value},
    Backend, Table,
};
use forcedfields_sql::{stmt::Filter, Serializer, Statement};
use jiff::civil::date;
use pretty_assertions::assert_eq;

fn table() -> Table {
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
            "touched",
            Timestamp::new(TimestampOptions {
                auto_update_only: true,
                null: true,
                ..Default::default()
            })
            .unwrap(),
        )
}

fn manual() -> Value {
    Value::DateTime(date(1999, 12, 31).at(23, 59, 59, 0))
}

fn record() -> Record {
    let mut record = Record::new();
    record.insert("code".to_string(), Value::from("abcd"));
    record.insert("created".to_string(), manual());
    record.insert("touched".to_string(), manual());
    record
}

fn serialize(stmt: &Statement, backend: Backend) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::for_backend(backend).serialize(stmt, &mut params);
    (sql, params)
}

#[test]
fn insert_postgresql() {
    let stmt = Statement::insert(&table(), &record()).unwrap();
    assert_eq!(stmt.deferred_columns(), ["created"]);

    let (sql, params) = serialize(&stmt, Backend::Postgresql);
    assert_eq!(
        sql,
        "INSERT INTO \"records\" (\"code\", \"created\", \"touched\") \
         VALUES ($1, CURRENT_TIMESTAMP, $2) RETURNING \"created\";"
    );
    assert_eq!(params, [Value::from("abcd"), manual()]);
}

#[test]
fn insert_mysql_has_no_returning() {
    let stmt = Statement::insert(&table(), &record()).unwrap();

    let (sql, params) = serialize(&stmt, Backend::Mysql);
    assert_eq!(
        sql,
        "INSERT INTO `records` (`code`, `created`, `touched`) VALUES (?, CURRENT_TIMESTAMP, ?);"
    );
    assert_eq!(params.len(), 2);
}

#[test]
fn insert_missing_values_become_null() {
    let stmt = Statement::insert(&table(), &Record::new()).unwrap();

    let (sql, params) = serialize(&stmt, Backend::Sqlite);
    assert_eq!(
        sql,
        "INSERT INTO \"records\" (\"code\", \"created\", \"touched\") \
         VALUES (?1, CURRENT_TIMESTAMP, ?2) RETURNING \"created\";"
    );
    // Never an empty string for the fixed char column
    assert_eq!(params, [Value::Null, Value::Null]);
}

#[test]
fn update_sqlite() {
    let stmt = Statement::update(
        &table(),
        &record(),
        Some(Filter::eq("code", "abcd")),
    )
    .unwrap();
    assert_eq!(stmt.deferred_columns(), ["touched"]);

    let (sql, params) = serialize(&stmt, Backend::Sqlite);
    assert_eq!(
        sql,
        "UPDATE \"records\" SET \"created\" = ?1, \"touched\" = CURRENT_TIMESTAMP \
         WHERE \"code\" = ?2;"
    );
    assert_eq!(params, [manual(), Value::from("abcd")]);
}

#[test]
fn update_without_filter() {
    let stmt = Statement::update(&table(), &record(), None).unwrap();

    let (sql, _) = serialize(&stmt, Backend::Mysql);
    assert_eq!(
        sql,
        "UPDATE `records` SET `code` = ?, `created` = ?, `touched` = CURRENT_TIMESTAMP;"
    );
}

#[test]
fn client_now_is_bound() {
    let table = Table::new("events").column(
        "at",
        Timestamp::new(TimestampOptions {
            auto_update: true,
            now: NowStrategy::Client,
            ..Default::default()
        })
        .unwrap(),
    );

    let stmt = Statement::insert(&table, &Record::new()).unwrap();
    assert!(stmt.deferred_columns().is_empty());

    let (sql, params) = serialize(&stmt, Backend::Postgresql);
    assert_eq!(sql, "INSERT INTO \"events\" (\"at\") VALUES ($1);");
    assert!(matches!(params[..], [Value::DateTime(_)]));
}

#[test]
fn unknown_column_is_rejected() {
    let mut record = Record::new();
    record.insert("nope".to_string(), Value::Null);

    let err = Statement::insert(&table(), &record).unwrap_err();
    assert_eq!(err.to_string(), "table `records` has no column `nope`");

    assert!(Statement::update(&table(), &record, None).is_err());
}

#[test]
fn supplied_values_are_validated() {
    let mut record = Record::new();
    record.insert("touched".to_string(), Value::from("yesterday"));

    let err = Statement::insert(&table(), &record).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "table `records` column `touched`: value is not a valid datetime"
    );

    let mut record = Record::new();
    record.insert("code".to_string(), Value::from("too long"));

    let err = Statement::update(&table(), &record, None).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "table `records` column `code`: value length 8 is too long (maximum: 4)"
    );
}

#[test]
fn overwritten_values_are_not_validated() {
    // `created` is replaced with the current time on insert, `touched` on update
    let mut record = Record::new();
    record.insert("created".to_string(), Value::from("yesterday"));
    assert!(Statement::insert(&table(), &record).is_ok());

    let mut record = Record::new();
    record.insert("touched".to_string(), Value::from("yesterday"));
    record.insert("created".to_string(), manual());
    assert!(Statement::update(&table(), &record, None).is_ok());
}

#[test]
fn update_with_nothing_to_assign_is_rejected() {
    let table = Table::new("codes").column(
        "code",
        FixedChar::new(FixedCharOptions {
            max_length: Some(4),
            ..Default::default()
        })
        .unwrap(),
    );

    let err = Statement::update(&table, &Record::new(), Some(Filter::eq("code", "abcd")))
        .unwrap_err();
    assert_eq!(err.to_string(), "table `codes` has no columns to update");
}

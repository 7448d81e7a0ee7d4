use proptest::prelude::*;
use sqldump_buffer::BufferConfig;
use sqldump_error::{DumpError, ErrorCategory};
use sqldump_extract::{ExtractStats, InsertExtractor, Row, RowCollector, TableSelection, Value};
use sqldump_parser::ParserConfig;

const MINI_DUMP: &str = include_str!("fixtures/mini_dump.sql");

fn collect(sql: &str, selection: TableSelection) -> (ExtractStats, RowCollector) {
    let mut extractor = InsertExtractor::new(selection, RowCollector::new());
    let stats = extractor.extract_str(sql).unwrap();
    (stats, extractor.into_sink())
}

fn text(s: &str) -> Value {
    Value::Text(s.to_owned())
}

#[test]
fn mysql_dump_rows() {
    let (stats, sink) = collect(MINI_DUMP, TableSelection::only(["users", "libgenrelist"]));
    assert_eq!(
        stats,
        ExtractStats {
            statements: 19,
            schemas: 2,
            rows: 9,
            skipped: 1
        }
    );

    assert_eq!(
        sink.tables,
        [
            (
                "libgenrelist".to_owned(),
                vec![
                    "GenreId".to_owned(),
                    "GenreCode".to_owned(),
                    "GenreDesc".to_owned(),
                    "GenreMeta".to_owned()
                ]
            ),
            (
                "users".to_owned(),
                vec![
                    "id".to_owned(),
                    "username".to_owned(),
                    "email".to_owned(),
                    "rating".to_owned()
                ]
            ),
        ]
    );

    let genres: Vec<&Row> = sink.rows_for("libgenrelist").collect();
    assert_eq!(genres.len(), 6);
    let expected: Row = [
        ("GenreId", Value::Integer(1)),
        ("GenreCode", text("sf_history")),
        ("GenreDesc", text("Альтернативная история")),
        ("GenreMeta", text("Фантастика")),
    ]
    .into_iter()
    .collect();
    assert_eq!(genres[0], &expected);
    assert_eq!(genres[4].get("GenreDesc"), Some(&text("Учебники и пособия ВУЗов")));
    assert_eq!(genres[5].get("GenreId"), Some(&Value::Integer(254)));

    let users: Vec<&Row> = sink.rows_for("users").collect();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].get("rating"), Some(&Value::Real(4.75)));
    assert_eq!(users[1].get("email"), Some(&Value::Null));
    assert_eq!(users[2].get("username"), Some(&text("o'brien")));
    assert_eq!(users[2].get("email"), Some(&text("ob@example.com\n")));
}

#[test]
fn select_all_includes_explicit_columns() {
    let (stats, sink) = collect(MINI_DUMP, TableSelection::All);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.schemas, 3);

    let audit: Vec<&Row> = sink.rows_for("audit_log").collect();
    assert_eq!(audit.len(), 2);
    assert_eq!(audit[0].get("message"), Some(&text("created; (not a delimiter)")));
    assert_eq!(audit[1].get("message"), Some(&text("-- not a comment")));
}

#[test]
fn streamed_dump_matches_in_memory() {
    let selection = TableSelection::only(["users", "libgenrelist"]);
    let (expected_stats, expected) = collect(MINI_DUMP, selection.clone());

    for (initial_capacity, step) in [(1, 1), (8, 4), (64, 7), (0x10000, 0x8000)] {
        let config = ParserConfig {
            buffer: BufferConfig::new(initial_capacity, step).unwrap(),
            ..ParserConfig::default()
        };
        let mut extractor =
            InsertExtractor::with_config(selection.clone(), RowCollector::new(), config);
        let stats = extractor.extract_reader(MINI_DUMP.as_bytes()).unwrap();
        assert_eq!(stats, expected_stats);
        assert_eq!(extractor.sink().rows, expected.rows);
        assert_eq!(extractor.sink().tables, expected.tables);
    }
}

#[test]
fn selective_extraction_is_silent() {
    let (stats, sink) = collect(
        "INSERT INTO other_table VALUES (1); INSERT INTO users VALUES (2);",
        TableSelection::only(["users"]),
    );
    assert_eq!(stats.skipped, 1);
    assert_eq!(sink.rows.len(), 1);
    assert_eq!(sink.rows[0].0, "users");
}

#[test]
fn malformed_input_is_fatal() {
    let selection = TableSelection::only(["t"]);

    let mut extractor = InsertExtractor::new(selection.clone(), RowCollector::new());
    let err = extractor
        .extract_str("INSERT INTO t (a,b) VALUES (1);")
        .unwrap_err();
    assert!(matches!(err, DumpError::ArityMismatch { .. }));

    let mut extractor = InsertExtractor::new(selection, RowCollector::new());
    let err = extractor
        .extract_str("CREATE TABLE t (a INT);\n/* unterminated")
        .unwrap_err();
    assert!(matches!(err, DumpError::UnterminatedComment { .. }));
    assert_eq!(err.category(), ErrorCategory::Lexical);
    // The statement before the failure was still processed.
    assert_eq!(extractor.schema("t").map(<[String]>::len), Some(1));
}

#[test]
fn rows_serialize_in_column_order() {
    let (_, sink) = collect(MINI_DUMP, TableSelection::only(["users"]));
    let json = serde_json::to_string(&sink.rows[1].1).unwrap();
    assert_eq!(json, r#"{"id":2,"username":"bob","email":null,"rating":3.5}"#);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn schema_columns_match_explicit_columns(
        columns in prop::collection::btree_set("c[a-z0-9_]{0,6}", 1..8),
        seed in 0_usize..1_000_000,
    ) {
        let columns: Vec<String> = columns.into_iter().collect();
        let values: Vec<String> = (0..columns.len())
            .map(|i| (seed + i).to_string())
            .collect();
        let column_list = columns.iter().map(|c| format!("`{c}`")).collect::<Vec<_>>().join(", ");
        let value_list = values.join(",");

        let via_schema = format!(
            "CREATE TABLE t ({}) ENGINE=InnoDB;\nINSERT INTO t VALUES ({value_list});",
            columns.iter().map(|c| format!("`{c}` INT NOT NULL")).collect::<Vec<_>>().join(",\n")
        );
        let explicit = format!("INSERT INTO t ({column_list}) VALUES ({value_list});");

        let (_, a) = collect(&via_schema, TableSelection::only(["t"]));
        let (_, b) = collect(&explicit, TableSelection::only(["t"]));
        prop_assert_eq!(&a.rows, &b.rows);
        prop_assert_eq!(
            a.rows[0].1.columns().collect::<Vec<_>>(),
            columns.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn positional_names_without_schema(values in prop::collection::vec(0_i64..1000, 1..10)) {
        let sql = format!(
            "INSERT INTO t VALUES ({});",
            values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
        );
        let (_, sink) = collect(&sql, TableSelection::only(["t"]));
        let row = &sink.rows[0].1;
        for (i, (column, value)) in row.iter().enumerate() {
            prop_assert_eq!(column, format!("#{i}"));
            prop_assert_eq!(value, &Value::Integer(values[i]));
        }
        prop_assert_eq!(row.len(), values.len());
    }
}

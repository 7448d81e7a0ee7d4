// INSERT and CREATE TABLE interpretation.
//
// Both walk a statement's token list strictly forward. INSERT follows
//
//   INTO -> table name -> [column list] -> VALUES -> tuple (, tuple)*
//
// and every deviation is fatal. Tuples and column lists must be groups whose
// elements alternate `item , item , ...` between the bounding parentheses.

use std::collections::HashSet;

use sqldump_error::{DumpError, Result};
use sqldump_parser::{Delimiter, Keyword, Statement, Token};

use crate::schema::{SchemaRegistry, TableSelection};
use crate::value::{Row, Value};

/// Shortest INSERT with a chance of being valid: `INSERT INTO t VALUES (..)`.
const MIN_INSERT_TOKENS: usize = 5;

/// Characters of statement text quoted in semantic errors.
const STATEMENT_EXCERPT_LEN: usize = 120;

fn statement_excerpt(statement: &Statement) -> String {
    let text = statement.to_string();
    if text.chars().count() <= STATEMENT_EXCERPT_LEN {
        return text;
    }
    let mut cut: String = text.chars().take(STATEMENT_EXCERPT_LEN).collect();
    cut.push_str("...");
    cut
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Items of a parenthesized `a , b , c` group, mapped through `item`.
fn split_tuple<T>(tuple: &[Token], item: impl Fn(&Token) -> Option<T>) -> Result<Vec<T>> {
    let bounded = tuple.len() >= 2
        && tuple[0].is_delimiter(Delimiter::LeftParen)
        && tuple[tuple.len() - 1].is_delimiter(Delimiter::RightParen);
    if !bounded {
        return Err(DumpError::malformed_tuple(
            render(tuple),
            "bad opening or closing delimiter",
        ));
    }

    let mut items = Vec::with_capacity(tuple.len() / 2);
    for i in (1..tuple.len()).step_by(2) {
        if i > 1 && !tuple[i - 1].is_delimiter(Delimiter::Comma) {
            return Err(DumpError::malformed_tuple(
                render(tuple),
                format!("bad delimiter at index #{i}"),
            ));
        }
        let Some(value) = item(&tuple[i]) else {
            return Err(DumpError::malformed_tuple(
                render(tuple),
                format!("bad value at index #{i}"),
            ));
        };
        items.push(value);
    }
    Ok(items)
}

pub(crate) fn tuple_values(tuple: &[Token]) -> Result<Vec<Value>> {
    split_tuple(tuple, Value::from_token)
}

pub(crate) fn column_names(list: &[Token]) -> Result<Vec<String>> {
    split_tuple(list, |token| token.as_identifier().map(str::to_owned))
}

/// Reject a column list that names a column twice; rows are keyed by name.
pub(crate) fn ensure_unique_columns(table: &str, columns: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    match columns.iter().find(|column| !seen.insert(column.as_str())) {
        Some(column) => Err(DumpError::DuplicateColumn {
            table: table.to_owned(),
            column: column.clone(),
        }),
        None => Ok(()),
    }
}

/// Zip tuple values against the resolved columns, or name them `#0, #1, ...`
/// when no column list is known.
pub(crate) fn build_row(table: &str, columns: Option<&[String]>, values: Vec<Value>) -> Result<Row> {
    match columns {
        Some(columns) if columns.len() != values.len() => Err(DumpError::ArityMismatch {
            table: table.to_owned(),
            columns: columns.len(),
            values: values.len(),
        }),
        Some(columns) => Ok(columns.iter().cloned().zip(values).collect()),
        None => Ok(values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (format!("#{i}"), value))
            .collect()),
    }
}

// ---------------------------------------------------------------------------
// CREATE TABLE
// ---------------------------------------------------------------------------

/// A `CREATE TABLE` the extractor acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableDefinition<'s> {
    /// Name as written.
    pub name: &'s str,
    pub fields: Vec<String>,
}

/// Recognize `CREATE TABLE [IF NOT EXISTS] name ( ... )` and pick its field
/// names: identifiers that open the body or follow a top-level comma.
///
/// Anything else, including unselected tables, yields `None`.
pub(crate) fn table_definition<'s>(
    statement: &'s Statement,
    selection: &TableSelection,
) -> Option<TableDefinition<'s>> {
    let tokens = statement.tokens();
    if !tokens.get(1)?.is_keyword(Keyword::Table) {
        return None;
    }

    let if_not_exists = tokens
        .get(2)
        .and_then(Token::as_identifier)
        .is_some_and(|word| word.eq_ignore_ascii_case("IF"))
        && tokens.get(3).is_some_and(|t| t.is_keyword(Keyword::Not))
        && tokens.get(4).is_some_and(|t| t.is_keyword(Keyword::Exists));
    let at = if if_not_exists { 5 } else { 2 };

    let name = tokens.get(at)?.as_identifier()?;
    if !selection.contains(name) {
        return None;
    }
    let body = tokens.get(at + 1)?.as_group()?;
    if !body.first()?.is_delimiter(Delimiter::LeftParen) {
        return None;
    }

    let mut fields = Vec::new();
    let mut previous: Option<&Token> = None;
    for token in &body[1..] {
        let starts_entry = previous.is_none_or(|p| p.is_delimiter(Delimiter::Comma));
        if starts_entry {
            if let Some(field) = token.as_identifier() {
                fields.push(field.to_owned());
            }
        }
        previous = Some(token);
    }
    Some(TableDefinition { name, fields })
}

// ---------------------------------------------------------------------------
// INSERT
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertState {
    ExpectInto,
    ExpectTableName,
    ExpectColumnsOrValues,
    ExpectValuesKeyword,
    ExpectTuple,
    ExpectComma,
}

/// Walk an INSERT and hand each tuple's row to `on_row`.
///
/// Returns `Ok(None)` when the table is not selected, otherwise the number
/// of rows emitted.
pub(crate) fn extract_insert<E, F>(
    statement: &Statement,
    selection: &TableSelection,
    schema: &SchemaRegistry,
    mut on_row: F,
) -> std::result::Result<Option<usize>, E>
where
    E: From<DumpError>,
    F: FnMut(&str, Row) -> std::result::Result<(), E>,
{
    let tokens = statement.tokens();
    if tokens.len() < MIN_INSERT_TOKENS {
        return Err(DumpError::StatementTooShort {
            statement: statement_excerpt(statement),
        }
        .into());
    }

    let mut state = InsertState::ExpectInto;
    let mut table = "";
    let mut explicit: Option<Vec<String>> = None;
    let mut rows = 0;

    for token in &tokens[1..] {
        state = match state {
            InsertState::ExpectInto => {
                if !token.is_keyword(Keyword::Into) {
                    return Err(DumpError::MissingInto {
                        statement: statement_excerpt(statement),
                    }
                    .into());
                }
                InsertState::ExpectTableName
            }
            InsertState::ExpectTableName => {
                let Some(name) = token.as_identifier() else {
                    return Err(DumpError::ExpectedTableName {
                        found: token.to_string(),
                        statement: statement_excerpt(statement),
                    }
                    .into());
                };
                if !selection.contains(name) {
                    return Ok(None);
                }
                table = name;
                InsertState::ExpectColumnsOrValues
            }
            InsertState::ExpectColumnsOrValues => match token {
                Token::Group(list) => {
                    let columns = column_names(list)?;
                    ensure_unique_columns(table, &columns)?;
                    explicit = Some(columns);
                    InsertState::ExpectValuesKeyword
                }
                Token::Keyword(Keyword::Values) => InsertState::ExpectTuple,
                _ => {
                    return Err(DumpError::MissingColumnsOrValues {
                        statement: statement_excerpt(statement),
                    }
                    .into());
                }
            },
            InsertState::ExpectValuesKeyword => {
                if !token.is_keyword(Keyword::Values) {
                    return Err(DumpError::MissingValues {
                        statement: statement_excerpt(statement),
                    }
                    .into());
                }
                InsertState::ExpectTuple
            }
            InsertState::ExpectTuple => {
                let Some(tuple) = token.as_group() else {
                    return Err(DumpError::UnexpectedToken {
                        expected: "values tuple",
                        found: token.to_string(),
                        statement: statement_excerpt(statement),
                    }
                    .into());
                };
                let columns = explicit.as_deref().or_else(|| schema.fields(table));
                let row = build_row(table, columns, tuple_values(tuple)?)?;
                on_row(table, row)?;
                rows += 1;
                InsertState::ExpectComma
            }
            InsertState::ExpectComma => {
                if !token.is_delimiter(Delimiter::Comma) {
                    return Err(DumpError::UnexpectedToken {
                        expected: "delimiter",
                        found: token.to_string(),
                        statement: statement_excerpt(statement),
                    }
                    .into());
                }
                InsertState::ExpectTuple
            }
        };
    }

    let statement = statement_excerpt(statement);
    match state {
        InsertState::ExpectComma => Ok(Some(rows)),
        InsertState::ExpectTuple => Err(DumpError::MissingTuple { statement }.into()),
        InsertState::ExpectValuesKeyword => Err(DumpError::MissingValues { statement }.into()),
        InsertState::ExpectColumnsOrValues => {
            Err(DumpError::MissingColumnsOrValues { statement }.into())
        }
        InsertState::ExpectInto | InsertState::ExpectTableName => {
            Err(DumpError::StatementTooShort { statement }.into())
        }
    }
}

//! Substring search over location addresses.
//!
//! # Responsibility
//! - Match addresses containing the query text, ignoring ASCII case.
//! - Return full records ordered like the unfiltered list.
//!
//! # Invariants
//! - Empty query text matches every record.
//! - `%`, `_` and `\` match literally unless `MatchMode::Pattern` is requested.
//! - Ordering is `address ASC, id ASC`.

use crate::db::DbError;
use crate::model::location::Location;
use crate::repo::location_repo::{invalid_row_message, location_from_row, LOCATION_SELECT_SQL};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LIKE_ESCAPE: char = '\\';

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for DB interaction and row decoding.
#[derive(Debug)]
pub enum SearchError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        match invalid_row_message(&value) {
            Some(message) => Self::InvalidData(message),
            None => Self::Db(DbError::Sqlite(value)),
        }
    }
}

/// How query text is turned into a `LIKE` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Wildcard characters in the text match themselves.
    #[default]
    Literal,
    /// `%` and `_` keep their `LIKE` meaning.
    Pattern,
}

/// Address search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    /// Substring to look for. Not trimmed.
    pub text: String,
    pub match_mode: MatchMode,
    /// Maximum number of records; `None` returns all matches.
    pub limit: Option<u32>,
}

impl AddressQuery {
    /// Creates a literal, unlimited query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            match_mode: MatchMode::Literal,
            limit: None,
        }
    }
}

/// Returns records whose address contains `query.text`.
pub fn search_by_address(conn: &Connection, query: &AddressQuery) -> SearchResult<Vec<Location>> {
    if query.limit == Some(0) {
        return Ok(Vec::new());
    }

    let mut sql = format!("{LOCATION_SELECT_SQL} WHERE address LIKE ?");
    let mut bind_values: Vec<Value> = Vec::new();

    match query.match_mode {
        MatchMode::Literal => {
            sql.push_str(" ESCAPE '\\'");
            bind_values.push(Value::Text(format!(
                "%{}%",
                escape_like(&query.text)
            )));
        }
        MatchMode::Pattern => {
            bind_values.push(Value::Text(format!("%{}%", query.text)));
        }
    }

    sql.push_str(" ORDER BY address ASC, id ASC");

    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(bind_values), location_from_row)?;
    let mut locations = Vec::new();
    for row in rows {
        locations.push(row?);
    }

    Ok(locations)
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

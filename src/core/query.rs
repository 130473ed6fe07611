//! Query parameters, filtering, sorting and pagination
//!
//! List requests carry their whole contract in the query string: `page`,
//! `sort_by` (comma-separated, `-` prefix for descending), `fields`
//! (comma-separated dotted paths), the `_` cache buster (ignored), and any
//! remaining pair is an equality filter.

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::error::{QueryError, VitrineError};

/// Cache-buster parameter appended by browsers; always stripped
pub const CACHE_BUSTER: &str = "_";

/// Parsed list-request parameters
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Page number (1-based)
    pub page: usize,

    /// Sort keys in priority order; `-field` sorts descending
    pub sort_by: Vec<String>,

    /// Requested sparse fieldset, `None` when the request named none
    pub fields: Option<Vec<String>>,

    /// Residual parameters, treated as equality filters
    pub filters: HashMap<String, String>,
}

impl ListParams {
    /// Parse from a query-string map
    ///
    /// Consumes `page`, `sort_by`, `fields` and the cache buster; everything
    /// left over becomes an equality filter.
    pub fn from_query(mut params: HashMap<String, String>) -> Result<Self, VitrineError> {
        params.remove(CACHE_BUSTER);

        let page = match params.remove("page") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(page) if page >= 1 => page,
                _ => return Err(QueryError::InvalidPage { raw }.into()),
            },
            None => 1,
        };

        let sort_by = params
            .remove("sort_by")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();

        let fields = params.remove("fields").map(|raw| split_list(&raw));

        Ok(Self {
            page,
            sort_by,
            fields,
            filters: params,
        })
    }
}

/// Split a comma-separated parameter, dropping empty segments
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep rows whose fields equal every filter value
///
/// Filtering on a field the rows do not carry matches nothing.
pub fn apply_filters(rows: Vec<Value>, filters: &HashMap<String, String>) -> Vec<Value> {
    if filters.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            filters.iter().all(|(field, expected)| {
                row.get(field)
                    .is_some_and(|value| value_matches(value, expected))
            })
        })
        .collect()
}

/// Query values arrive as strings; scalars compare through their canonical form
fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => {
            n.to_string() == expected
                || expected
                    .parse::<f64>()
                    .is_ok_and(|e| n.as_f64().is_some_and(|v| v == e))
        }
        Value::Bool(b) => expected.eq_ignore_ascii_case(if *b { "true" } else { "false" }),
        Value::Null => expected.is_empty() || expected == "null",
        _ => false,
    }
}

/// Stable multi-key sort over serialized field values
pub fn apply_sort(rows: &mut [Value], sort_by: &[String]) {
    if sort_by.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        for key in sort_by {
            let (field, descending) = match key.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (key.as_str(), false),
            };
            let mut ord = cmp_values(a.get(field), b.get(field));
            if descending {
                ord = ord.reverse();
            }
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

/// Order JSON scalars: null < bool < number < string < everything else
fn cmp_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Pagination metadata returned in the list envelope
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// Number of rows on this page
    pub count: usize,

    /// Current page number (1-based)
    pub page: usize,

    /// Page size
    pub per_page: usize,

    /// Last valid page number
    pub max_page: usize,

    /// Total rows after filtering
    pub total_count: usize,
}

/// Envelope for list responses
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub meta: PageMeta,
    pub results: Vec<Value>,
}

/// Slice one page out of the full result set
///
/// Page 1 is always valid, even for an empty set; anything beyond
/// `max_page` is out of range.
pub fn paginate(
    rows: Vec<Value>,
    page: usize,
    per_page: usize,
) -> Result<ListResponse, VitrineError> {
    let per_page = per_page.max(1);
    let total_count = rows.len();
    let max_page = total_count.div_ceil(per_page).max(1);

    if page > max_page {
        return Err(QueryError::PageOutOfRange { page, max_page }.into());
    }

    let start = (page - 1) * per_page;
    let results: Vec<Value> = rows.into_iter().skip(start).take(per_page).collect();

    Ok(ListResponse {
        meta: PageMeta {
            count: results.len(),
            page,
            per_page,
            max_page,
            total_count,
        },
        results,
    })
}

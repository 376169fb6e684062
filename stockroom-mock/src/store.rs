//! In-memory tables

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// A stored row
pub type Record = Map<String, Value>;

/// Parsed list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u64,
    pub limit: u64,
    pub keyword: Option<String>,
    /// Equality filters, every other query parameter
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Largest page size served; bigger requests are clamped
    pub const MAX_LIMIT: u64 = 1000;

    pub fn from_query(mut query: HashMap<String, String>) -> Self {
        let page = query
            .remove("page")
            .and_then(|p| p.parse().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        let limit = query
            .remove("limit")
            .and_then(|l| l.parse().ok())
            .filter(|l| *l > 0)
            .map(|l: u64| l.min(Self::MAX_LIMIT))
            .unwrap_or(Self::DEFAULT_LIMIT);
        let keyword = query
            .remove("keyword")
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        let filters = query
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();

        Self {
            page,
            limit,
            keyword,
            filters,
        }
    }

    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_items.div_ceil(self.limit)
    }

    /// Apply keyword, filters and pagination; returns the page and the
    /// number of matching rows
    pub fn apply<'a>(
        &self,
        rows: impl Iterator<Item = &'a Record>,
        searchable: &[&str],
    ) -> (Vec<Record>, u64) {
        let matching: Vec<&Record> = rows
            .filter(|row| self.matches_keyword(row, searchable))
            .filter(|row| {
                self.filters
                    .iter()
                    .all(|(key, expected)| row.get(key).map(text).as_deref() == Some(expected.as_str()))
            })
            .collect();

        let total = matching.len() as u64;
        // page comes straight from the query string
        let skip = self.page.saturating_sub(1).saturating_mul(self.limit);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect();
        (page, total)
    }

    fn matches_keyword(&self, row: &Record, searchable: &[&str]) -> bool {
        let Some(keyword) = &self.keyword else {
            return true;
        };
        searchable.iter().any(|field| {
            row.get(*field)
                .map(|v| text(v).to_lowercase().contains(keyword.as_str()))
                .unwrap_or(false)
        })
    }
}

/// Render a scalar the way it appears in a query string
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One resource's rows, ordered by id
#[derive(Debug, Default)]
pub struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new row, assigning `id`, timestamps and a default status
    pub fn insert(&mut self, mut record: Record) -> Record {
        self.next_id += 1;
        let id = self.next_id;
        let now = timestamp();

        record.insert("id".into(), Value::from(id));
        if !matches!(record.get("status"), Some(Value::String(_))) {
            record.insert("status".into(), Value::from("active"));
        }
        record.insert("created_at".into(), Value::from(now.clone()));
        record.insert("updated_at".into(), Value::from(now));

        self.rows.insert(id, record.clone());
        record
    }

    /// Merge `patch` into an existing row
    pub fn update(&mut self, id: i64, patch: Record) -> Option<Record> {
        let row = self.rows.get_mut(&id)?;
        for (key, value) in patch {
            if matches!(key.as_str(), "id" | "created_at") {
                continue;
            }
            row.insert(key, value);
        }
        row.insert("updated_at".into(), Value::from(timestamp()));
        Some(row.clone())
    }

    pub fn remove(&mut self, id: i64) -> Option<Record> {
        self.rows.remove(&id)
    }

    /// Remove every row where `field` equals `value`
    pub fn remove_where(&mut self, field: &str, value: i64) -> usize {
        let before = self.rows.len();
        self.rows
            .retain(|_, row| row.get(field).and_then(Value::as_i64) != Some(value));
        before - self.rows.len()
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.rows.get(&id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Record> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

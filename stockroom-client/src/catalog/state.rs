//! Observable controller state

use shared::{FieldErrors, Pagination};

use crate::query::ListQuery;

/// List loading state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Fetch failed; carries the message shown to the user
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What happened to a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list
    Applied,
    /// A newer request had already been applied; the response was dropped
    Stale,
    /// The request failed; the list was cleared
    Failed,
}

/// Copy of the list state at one point in time
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub query: ListQuery,
    pub load_state: LoadState,
}

/// Create/edit form state
#[derive(Debug, Clone)]
pub struct FormState<T> {
    pub open: bool,
    /// Record being edited; `None` while creating
    pub editing: Option<T>,
    /// Per-field messages from the last failed save
    pub errors: FieldErrors,
}

impl<T> FormState<T> {
    pub fn closed() -> Self {
        Self {
            open: false,
            editing: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self::closed()
    }
}

pub(crate) struct ListState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) pagination: Pagination,
    pub(crate) query: ListQuery,
    pub(crate) load_state: LoadState,
    /// Sequence number of the last applied response
    pub(crate) applied_seq: u64,
}

impl<T: Clone> ListState<T> {
    pub(crate) fn new(query: ListQuery) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(query.page, query.limit, 0),
            query,
            load_state: LoadState::Idle,
            applied_seq: 0,
        }
    }

    pub(crate) fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            items: self.items.clone(),
            pagination: self.pagination,
            query: self.query.clone(),
            load_state: self.load_state.clone(),
        }
    }
}

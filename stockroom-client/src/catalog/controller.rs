//! Generic list controller
//!
//! Every admin page follows the same cycle: fetch a page of records, let
//! the user create, edit, toggle or delete one, then fetch again. The
//! controller owns that cycle for one [`Resource`].
//!
//! All methods take `&self`, so one controller can be shared between
//! concurrent tasks. List responses are applied in request order: each
//! fetch takes a sequence number and a response older than the last
//! applied one is dropped.

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};
use shared::{CatalogRecord, MessageResponse, Pagination, Status};
use tokio::sync::{RwLock, broadcast};

use super::notice::{Notice, NoticeBus};
use super::operation::{OperationKey, Operations};
use super::resource::{Resource, StatusPayload, fetch_page};
use super::state::{FetchOutcome, FormState, ListSnapshot, ListState, LoadState};
use crate::client::{Attachment, HttpClient, RequestBody};
use crate::query::ListQuery;
use crate::{ClientConfig, ClientResult};

/// List/form controller for one resource
pub struct CatalogController<C, R: Resource> {
    client: Arc<C>,
    list: RwLock<ListState<R::Item>>,
    form: RwLock<FormState<R::Item>>,
    next_seq: AtomicU64,
    search_generation: AtomicU64,
    search_debounce: Duration,
    operations: Operations,
    notices: NoticeBus,
    _resource: PhantomData<fn() -> R>,
}

impl<C: HttpClient, R: Resource> CatalogController<C, R> {
    pub fn new(client: Arc<C>, config: &ClientConfig) -> Self {
        Self {
            client,
            list: RwLock::new(ListState::new(ListQuery::new(1, config.page_size))),
            form: RwLock::new(FormState::closed()),
            next_seq: AtomicU64::new(0),
            search_generation: AtomicU64::new(0),
            search_debounce: config.search_debounce,
            operations: Operations::new(),
            notices: NoticeBus::default(),
            _resource: PhantomData,
        }
    }

    /// Start from a preset query (e.g. sub-categories of one category)
    pub fn with_query(mut self, query: ListQuery) -> Self {
        *self.list.get_mut() = ListState::new(query);
        self
    }

    /// Publish notices on a shared bus
    pub fn with_notices(mut self, notices: NoticeBus) -> Self {
        self.notices = notices;
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    pub async fn snapshot(&self) -> ListSnapshot<R::Item> {
        self.list.read().await.snapshot()
    }

    pub async fn items(&self) -> Vec<R::Item> {
        self.list.read().await.items.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.list.read().await.pagination
    }

    pub async fn query(&self) -> ListQuery {
        self.list.read().await.query.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.list.read().await.load_state.clone()
    }

    pub async fn form(&self) -> FormState<R::Item> {
        self.form.read().await.clone()
    }

    pub fn is_busy(&self, key: OperationKey) -> bool {
        self.operations.is_busy(key)
    }

    // ========== Fetching ==========

    /// Fetch the current page with the current filters
    pub async fn refresh(&self) -> FetchOutcome {
        let query = self.query().await;
        self.fetch(query).await
    }

    /// Navigate to `page`
    ///
    /// Returns `None` without a request when `page` lies outside
    /// `1..=total_pages`.
    pub async fn go_to_page(&self, page: u32) -> Option<FetchOutcome> {
        let query = {
            let list = self.list.read().await;
            if !list.pagination.contains_page(page) {
                tracing::debug!(resource = R::LABEL, page, "ignoring out-of-range page");
                return None;
            }
            ListQuery {
                page,
                ..list.query.clone()
            }
        };
        Some(self.fetch(query).await)
    }

    /// Change the page size and go back to page 1 (zero is ignored)
    pub async fn set_per_page(&self, limit: u32) -> Option<FetchOutcome> {
        if limit == 0 {
            return None;
        }
        let mut query = self.query().await;
        query.page = 1;
        query.limit = limit;
        Some(self.fetch(query).await)
    }

    /// Set an equality filter (`status`, `cat_id`, ...) and go back to page 1
    pub async fn set_filter(&self, key: impl Into<String>, value: impl ToString) -> FetchOutcome {
        let mut query = self.query().await;
        query.page = 1;
        query.filters.insert(key.into(), value.to_string());
        self.fetch(query).await
    }

    /// Remove a filter; `None` when it was not set
    pub async fn clear_filter(&self, key: &str) -> Option<FetchOutcome> {
        let mut query = self.query().await;
        query.filters.remove(key)?;
        query.page = 1;
        Some(self.fetch(query).await)
    }

    /// Debounced keyword search
    ///
    /// Waits for the quiet period; if another `search` call arrived in the
    /// meantime this one returns `None` without a request and only the
    /// latest keyword is fetched.
    pub async fn search(&self, keyword: impl Into<String>) -> Option<FetchOutcome> {
        let keyword = keyword.into();
        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.search_debounce).await;
        if self.search_generation.load(Ordering::SeqCst) != generation {
            return None;
        }
        Some(self.search_now(keyword).await)
    }

    /// Keyword search without the quiet period
    pub async fn search_now(&self, keyword: impl Into<String>) -> FetchOutcome {
        let mut query = self.query().await;
        query.page = 1;
        query.set_keyword(keyword);
        self.fetch(query).await
    }

    async fn fetch(&self, query: ListQuery) -> FetchOutcome {
        let seq = {
            let mut list = self.list.write().await;
            list.query = query.clone();
            list.load_state = LoadState::Loading;
            self.next_seq.fetch_add(1, Ordering::SeqCst) + 1
        };

        let path = query.to_path(R::PATH);
        tracing::debug!(resource = R::LABEL, seq, %path, "fetching list");

        let result = fetch_page::<C, R>(&self.client, &query).await;

        let mut list = self.list.write().await;
        if seq <= list.applied_seq {
            tracing::debug!(
                resource = R::LABEL,
                seq,
                applied = list.applied_seq,
                "discarding stale list response"
            );
            return FetchOutcome::Stale;
        }
        list.applied_seq = seq;

        match result {
            Ok(page) => {
                list.items = page.items;
                list.pagination = page.pagination;
                // a newer request is still in flight
                list.load_state = if self.next_seq.load(Ordering::SeqCst) == seq {
                    LoadState::Loaded
                } else {
                    LoadState::Loading
                };
                FetchOutcome::Applied
            }
            Err(err) => {
                let message = err.user_message(&format!("Failed to fetch {}", R::LABEL));
                tracing::warn!(resource = R::LABEL, error = %err, "list fetch failed");
                list.items.clear();
                list.load_state = LoadState::Error(message.clone());
                drop(list);
                self.notices.publish(Notice::error(message));
                FetchOutcome::Failed
            }
        }
    }

    // ========== Form ==========

    pub async fn open_create(&self) {
        *self.form.write().await = FormState {
            open: true,
            editing: None,
            errors: Default::default(),
        };
    }

    pub async fn open_edit(&self, item: R::Item) {
        *self.form.write().await = FormState {
            open: true,
            editing: Some(item),
            errors: Default::default(),
        };
    }

    pub async fn close_form(&self) {
        *self.form.write().await = FormState::closed();
    }

    // ========== Mutations ==========

    /// Create a record
    ///
    /// Sent as multipart when `attachment` is set, JSON otherwise. On
    /// success the form closes and the current page is fetched again; on
    /// failure the form stays open with the server's field errors.
    pub async fn create<P>(&self, payload: &P, attachment: Option<Attachment>) -> ClientResult<String>
    where
        P: Serialize + Sync,
    {
        let _guard = self.operations.begin(OperationKey::Saving)?;
        let body = RequestBody::with_attachment(payload, attachment)?;
        tracing::info!(resource = R::LABEL, "creating record");
        let result = self.client.post(R::PATH, body).await;
        self.finish_save(result, "created", "create").await
    }

    /// Update a record with `PUT {path}/{id}`
    pub async fn update<P>(
        &self,
        id: i64,
        payload: &P,
        attachment: Option<Attachment>,
    ) -> ClientResult<String>
    where
        P: Serialize + Sync,
    {
        let _guard = self.operations.begin(OperationKey::Saving)?;
        let body = RequestBody::with_attachment(payload, attachment)?;
        tracing::info!(resource = R::LABEL, id, "updating record");
        let result = self.client.put(&R::item_path(id), body).await;
        self.finish_save(result, "updated", "update").await
    }

    async fn finish_save(
        &self,
        result: ClientResult<Option<MessageResponse>>,
        done: &str,
        verb: &str,
    ) -> ClientResult<String> {
        match result {
            Ok(response) => {
                let message = success_message(response)
                    .unwrap_or_else(|| format!("{} {} successfully", R::SINGULAR, done));
                self.close_form().await;
                self.notices.publish(Notice::success(message.clone()));
                self.refresh().await;
                Ok(message)
            }
            Err(err) => {
                let fallback = format!("Failed to {} {}", verb, R::SINGULAR.to_lowercase());
                self.form.write().await.errors = err.field_errors();
                self.notices.publish(Notice::error(err.user_message(&fallback)));
                Err(err)
            }
        }
    }

    /// Flip a record between active and inactive
    ///
    /// Returns the new status. Endpoints that validate every column on
    /// update get the whole record back.
    pub async fn toggle_status(&self, item: &R::Item) -> ClientResult<Status> {
        let id = item.id();
        let _guard = self.operations.begin(OperationKey::Status(id))?;
        let next = item.status().toggle();

        let body = match R::STATUS_PAYLOAD {
            StatusPayload::NameAndStatus => json!({ "name": item.name(), "status": next }),
            StatusPayload::FullRecord => {
                let mut value = serde_json::to_value(item)?;
                if let Value::Object(map) = &mut value {
                    for key in ["id", "created_at", "updated_at"] {
                        map.remove(key);
                    }
                    map.insert("status".to_string(), json!(next));
                }
                value
            }
        };

        tracing::info!(resource = R::LABEL, id, status = %next, "toggling status");
        match self
            .client
            .put::<Option<MessageResponse>>(&R::item_path(id), RequestBody::Json(body))
            .await
        {
            Ok(response) => {
                let message = success_message(response)
                    .unwrap_or_else(|| "Status updated successfully".to_string());
                self.notices.publish(Notice::success(message));
                self.refresh().await;
                Ok(next)
            }
            Err(err) => {
                self.notices
                    .publish(Notice::error(err.user_message("Failed to update status")));
                Err(err)
            }
        }
    }

    /// Delete a record after `confirm` agrees
    ///
    /// Returns `false` when the user declined. Deleting the last row of a
    /// page beyond the first fetches the previous page.
    pub async fn delete(&self, id: i64, confirm: impl FnOnce() -> bool) -> ClientResult<bool> {
        if !confirm() {
            return Ok(false);
        }
        let _guard = self.operations.begin(OperationKey::Delete(id))?;

        tracing::info!(resource = R::LABEL, id, "deleting record");
        match self
            .client
            .delete::<Option<MessageResponse>>(&R::item_path(id))
            .await
        {
            Ok(response) => {
                let message = success_message(response)
                    .unwrap_or_else(|| format!("{} deleted successfully", R::SINGULAR));
                self.notices.publish(Notice::success(message));

                let query = {
                    let list = self.list.read().await;
                    let mut query = list.query.clone();
                    let was_last_row =
                        list.items.len() == 1 && list.items.iter().all(|item| item.id() == id);
                    if was_last_row && query.page > 1 {
                        query.page -= 1;
                    }
                    query
                };
                self.fetch(query).await;
                Ok(true)
            }
            Err(err) => {
                let fallback = format!("Failed to delete {}", R::SINGULAR.to_lowercase());
                self.notices.publish(Notice::error(err.user_message(&fallback)));
                Err(err)
            }
        }
    }
}

fn success_message(response: Option<MessageResponse>) -> Option<String> {
    response
        .and_then(|r| r.message)
        .filter(|m| !m.trim().is_empty())
}

//! Stock entry submission

use std::sync::Arc;

use shared::MessageResponse;
use shared::models::SerialNumber;
use shared::stock::{FormMode, StockForm};

use crate::catalog::resource::{Resource, SerialNumbers, Stocks, fetch_page};
use crate::catalog::{Notice, NoticeBus, OperationKey, Operations};
use crate::client::{HttpClient, RequestBody};
use crate::lookups::LOOKUP_LIMIT;
use crate::query::ListQuery;
use crate::ClientResult;

/// Stock entry endpoints
pub struct StockApi<C> {
    client: Arc<C>,
    operations: Operations,
    notices: NoticeBus,
}

impl<C: HttpClient> StockApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            operations: Operations::new(),
            notices: NoticeBus::default(),
        }
    }

    pub fn with_notices(mut self, notices: NoticeBus) -> Self {
        self.notices = notices;
        self
    }

    /// Validate the form and send it
    ///
    /// Local validation runs first; a form with a blank SKU, a serial count
    /// that does not match the quantity, or a missing selection is rejected
    /// with [`ClientError::Form`](crate::ClientError::Form) and nothing is
    /// sent. New entries are posted, existing ones updated with `PUT`.
    pub async fn submit(&self, form: &StockForm) -> ClientResult<String> {
        let submission = match form.submission() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!(code = err.code(), "stock form rejected locally");
                let err = crate::ClientError::from(err);
                self.notices
                    .publish(Notice::error(err.user_message("Please check the form")));
                return Err(err);
            }
        };

        let _guard = self.operations.begin(OperationKey::Saving)?;
        let body = RequestBody::json(&submission)?;

        let (result, done) = match form.mode() {
            FormMode::Create => {
                tracing::info!(product_id = ?submission.product_id, quantity = submission.quantity, "creating stock entry");
                (self.client.post::<Option<MessageResponse>>(Stocks::PATH, body).await, "created")
            }
            FormMode::Edit { id } => {
                tracing::info!(id, "updating stock entry");
                (
                    self.client
                        .put::<Option<MessageResponse>>(&Stocks::item_path(id), body)
                        .await,
                    "updated",
                )
            }
        };

        match result {
            Ok(response) => {
                let message = response
                    .and_then(|r| r.message)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Stock {} successfully", done));
                self.notices.publish(Notice::success(message.clone()));
                Ok(message)
            }
            Err(err) => {
                self.notices
                    .publish(Notice::error(err.user_message("Failed to save stock")));
                Err(err)
            }
        }
    }

    /// Serial numbers recorded for one stock entry
    pub async fn serials(&self, stock_id: i64) -> ClientResult<Vec<SerialNumber>> {
        let query = ListQuery::new(1, LOOKUP_LIMIT).with_filter("stock_id", stock_id);
        let page = fetch_page::<C, SerialNumbers>(&self.client, &query).await?;
        Ok(page.items)
    }
}

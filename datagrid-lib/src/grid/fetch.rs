//! Fetch passes and the retry loop.

use std::sync::Arc;

use super::Backend;
use super::DataGrid;
use super::state::QueryKey;
use crate::error::DisplayError;
use crate::error::RemoteError;
use crate::model::CursorPage;
use crate::model::OffsetPage;
use crate::source::CursorRequest;
use crate::source::CursorSource;
use crate::source::OffsetRequest;
use crate::source::OffsetSource;

/// A remote request planned under the state lock and issued without it.
enum Plan {
    Offset(Arc<dyn OffsetSource>, OffsetRequest),
    Cursor(Arc<dyn CursorSource>, CursorRequest),
}

enum Fetched {
    Offset(OffsetPage),
    Cursor(CursorPage),
}

enum Outcome {
    Fetched(Fetched),
    Failed { attempts: u32, error: RemoteError },
    /// The query changed between attempts.
    Superseded,
}

impl DataGrid {
    /// Brings the displayed page in line with the current query.
    ///
    /// Local grids are recomputed in place. Remote grids issue one request,
    /// retried while the retry policy allows. Only one request is in flight
    /// per grid: a pass requested meanwhile is folded into the running one,
    /// which discards its result and fetches again if the query moved.
    pub(crate) async fn run_pass(&self, refresh: bool) {
        let mut refresh = refresh;
        loop {
            let (key, plan) = {
                let mut state = self.inner.state.lock().await;
                if state.external_loading {
                    log::debug!("Skipping fetch pass while the caller is loading");
                    state.skipped = true;
                    return;
                }
                if state.fetching {
                    state.refresh_queued |= refresh;
                    return;
                }

                let key = state.query_key();
                let plan = match &self.inner.backend {
                    Backend::Local => {
                        state.apply_local();
                        log::debug!(
                            "Local page {} ready ({} rows)",
                            key.page,
                            state.displayed.count
                        );
                        return;
                    }
                    Backend::Offset(source) => Plan::Offset(
                        source.clone(),
                        OffsetRequest {
                            page_size: key.page_size,
                            offset: state.cursor.offset(),
                            sort_key: key.sort_key.clone(),
                            sort_order: key.sort_order,
                            search: key.search.clone(),
                        },
                    ),
                    Backend::Cursor(source) => {
                        if refresh {
                            state.cursor.invalidate_current();
                        } else if let Some(page) = state.cursor.cached().cloned() {
                            log::debug!("Serving cursor page {} from memory", key.page);
                            state.apply_cursor(page);
                            return;
                        }
                        Plan::Cursor(
                            source.clone(),
                            CursorRequest {
                                page_size: key.page_size,
                                cursor: state.cursor.request_cursor(),
                                search: key.search.clone(),
                            },
                        )
                    }
                };

                state.fetching = true;
                state.error = None;
                (key, plan)
            };

            log::debug!(
                "Fetching page {} (size {}, sort {} {}, search {:?})",
                key.page,
                key.page_size,
                key.sort_key,
                key.sort_order,
                key.search
            );
            let outcome = self.fetch_with_retry(&key, &plan).await;

            let mut state = self.inner.state.lock().await;
            state.fetching = false;
            let queued_refresh = std::mem::take(&mut state.refresh_queued);

            if state.query_key() != key || matches!(outcome, Outcome::Superseded) {
                log::debug!("Discarding result for page {}: query changed", key.page);
                refresh = queued_refresh;
                continue;
            }

            match outcome {
                Outcome::Fetched(Fetched::Offset(page)) => {
                    state.retry.on_success();
                    state.apply_offset(page);
                }
                Outcome::Fetched(Fetched::Cursor(page)) => {
                    state.retry.on_success();
                    state.apply_cursor(page);
                }
                Outcome::Failed { attempts, error } => {
                    log::error!("Fetch failed after {} attempts: {}", attempts, error);
                    state.error = Some(DisplayError::Fetch { attempts, error });
                }
                Outcome::Superseded => {}
            }

            if !queued_refresh {
                return;
            }
            refresh = true;
        }
    }

    async fn fetch_with_retry(&self, key: &QueryKey, plan: &Plan) -> Outcome {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let result = match plan {
                Plan::Offset(source, request) => {
                    source.fetch(request.clone()).await.map(Fetched::Offset)
                }
                Plan::Cursor(source, request) => {
                    source.fetch(request.clone()).await.map(Fetched::Cursor)
                }
            };

            let error = match result {
                Ok(fetched) => return Outcome::Fetched(fetched),
                Err(e) => e.normalize(),
            };

            let mut state = self.inner.state.lock().await;
            if state.query_key() != *key {
                return Outcome::Superseded;
            }
            if !state.retry.try_retry() {
                return Outcome::Failed { attempts, error };
            }
            log::warn!(
                "Fetch attempt {} failed, retrying ({} left): {}",
                attempts,
                state.retry.remaining(),
                error
            );
        }
    }
}

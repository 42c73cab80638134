//! Row actions and the confirmation workflow.

use std::sync::Arc;

use super::DataGrid;
use crate::action::ActionKind;
use crate::action::ActionOutcome;
use crate::action::RowAction;
use crate::error::DisplayError;
use crate::error::GridError;
use crate::model::Row;

impl DataGrid {
    /// Asks for confirmation of `action` on displayed row `row`.
    ///
    /// The row shows a confirmation prompt until [`confirm`](Self::confirm)
    /// or [`cancel`](Self::cancel). A pending request on another row is
    /// replaced.
    pub async fn request_action(&self, row: usize, action: ActionKind) -> Result<(), GridError> {
        let actions = &self.inner.actions;
        if actions.handler(action).is_none() {
            return Err(GridError::ActionUnavailable(action));
        }
        if !actions.needs_confirmation(action) {
            return Err(GridError::NotConfirmable(action));
        }

        let mut state = self.inner.state.lock().await;
        let len = state.displayed.rows.len();
        if row >= len {
            return Err(GridError::RowOutOfRange { index: row, len });
        }
        state.confirmation.request(row, action);
        Ok(())
    }

    /// Answers "yes" to the pending confirmation.
    ///
    /// Runs the pending action with the row. On success the grid clears its
    /// error and refreshes once; on failure the error is shown and nothing is
    /// refreshed. Either way the grid returns to idle.
    pub async fn confirm(&self) -> Result<ActionOutcome, GridError> {
        let (action, handler, row) = {
            let mut state = self.inner.state.lock().await;
            let (index, action) = state.confirmation.take().ok_or(GridError::NothingPending)?;
            let len = state.displayed.rows.len();
            let row = state
                .displayed
                .rows
                .get(index)
                .cloned()
                .ok_or(GridError::RowOutOfRange { index, len })?;
            let handler = self
                .inner
                .actions
                .handler(action)
                .ok_or(GridError::ActionUnavailable(action))?;
            (action, handler, row)
        };
        Ok(self.execute(action, handler, row, true).await)
    }

    /// Answers "no" to the pending confirmation. Nothing runs.
    pub async fn cancel(&self) {
        self.inner.state.lock().await.confirmation.cancel();
    }

    /// Runs free custom action `index` on displayed row `row` right away.
    ///
    /// Free actions do not refresh the grid.
    pub async fn run_free_action(
        &self,
        row: usize,
        index: usize,
    ) -> Result<ActionOutcome, GridError> {
        let action = ActionKind::Custom(index);
        let custom = self
            .inner
            .actions
            .custom()
            .get(index)
            .ok_or(GridError::ActionUnavailable(action))?;
        if !custom.is_free() {
            return Err(GridError::NotFree(index));
        }
        let handler = custom.action.clone();

        let snapshot = {
            let state = self.inner.state.lock().await;
            let len = state.displayed.rows.len();
            state
                .displayed
                .rows
                .get(row)
                .cloned()
                .ok_or(GridError::RowOutOfRange { index: row, len })?
        };
        Ok(self.execute(action, handler, snapshot, false).await)
    }

    /// Runs the create action with `draft`, refreshing on success.
    pub async fn create(&self, draft: Row) -> Result<ActionOutcome, GridError> {
        let handler = self
            .inner
            .actions
            .handler(ActionKind::Create)
            .ok_or(GridError::CreateUnavailable)?;
        Ok(self.execute(ActionKind::Create, handler, draft, true).await)
    }

    async fn execute(
        &self,
        action: ActionKind,
        handler: Arc<dyn RowAction>,
        row: Row,
        refresh: bool,
    ) -> ActionOutcome {
        match handler.run(row).await {
            Ok(()) => {
                log::debug!("Action {} completed", action);
                self.inner.state.lock().await.error = None;
                if refresh {
                    self.refresh().await;
                }
                ActionOutcome::Completed
            }
            Err(e) => {
                let error = e.normalize();
                log::warn!("Action {} failed: {}", action, error);
                self.inner.state.lock().await.error =
                    Some(DisplayError::Action { action, error });
                ActionOutcome::Failed
            }
        }
    }
}

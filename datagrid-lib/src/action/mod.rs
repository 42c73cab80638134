//! Row actions: create, update, delete and caller-defined custom actions.

mod kind;
mod set;

pub use kind::ActionKind;
pub use set::ActionSet;
pub use set::CustomAction;

use std::future::Future;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::Row;

/// How a triggered action ended.
///
/// A failure is also stored as the grid's current error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action succeeded.
    Completed,
    /// The action returned an error.
    Failed,
}

/// An operation run against one row.
///
/// Any async closure taking a [`Row`] implements this trait.
///
/// # Example
///
/// ```
/// use datagrid_lib::action::RowAction;
/// use datagrid_lib::error::RemoteError;
/// use datagrid_lib::model::Row;
///
/// let delete = |row: Row| async move {
///     match row.get("id") {
///         Some(_) => Ok(()),
///         None => Err(RemoteError::message("row has no id")),
///     }
/// };
/// fn assert_action(_: &impl RowAction) {}
/// assert_action(&delete);
/// ```
#[async_trait]
pub trait RowAction: Send + Sync {
    /// Runs the action with a snapshot of the row.
    async fn run(&self, row: Row) -> Result<(), RemoteError>;
}

#[async_trait]
impl<F, Fut> RowAction for F
where
    F: Fn(Row) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), RemoteError>> + Send + 'static,
{
    async fn run(&self, row: Row) -> Result<(), RemoteError> {
        (self)(row).await
    }
}

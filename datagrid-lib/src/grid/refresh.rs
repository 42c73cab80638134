//! Externally held refresh trigger.

use std::sync::Arc;
use std::sync::Weak;

use super::DataGrid;
use super::DataGridInner;
use crate::error::GridError;

/// Re-runs a grid's current fetch from outside the grid.
///
/// Holds a weak reference, so a handle kept by the caller does not keep an
/// unmounted grid alive. All handles of one grid compare equal.
#[derive(Clone)]
pub struct RefreshHandle {
    grid: Weak<DataGridInner>,
}

impl RefreshHandle {
    pub(crate) fn new(inner: &Arc<DataGridInner>) -> Self {
        Self {
            grid: Arc::downgrade(inner),
        }
    }

    /// Re-runs the grid's current fetch with unchanged parameters.
    pub async fn refresh(&self) -> Result<(), GridError> {
        let inner = self.grid.upgrade().ok_or(GridError::Unmounted)?;
        DataGrid { inner }.refresh().await;
        Ok(())
    }

    /// Returns `true` if the grid is still alive.
    pub fn is_mounted(&self) -> bool {
        self.grid.strong_count() > 0
    }

    /// Returns `true` if both handles trigger the same grid.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.grid, &other.grid)
    }
}

impl PartialEq for RefreshHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for RefreshHandle {}

impl std::fmt::Debug for RefreshHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshHandle")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

//! The actions configured on a grid.

use std::sync::Arc;

use super::ActionKind;
use super::RowAction;

/// A caller-defined row action.
///
/// Free actions (the default) run as soon as they are triggered. Setting
/// `is_free_action` to `false` routes the action through the same
/// confirmation step as update and delete.
#[derive(Clone)]
pub struct CustomAction {
    /// Display name, used when no icon is given.
    pub name: String,
    /// Icon identifier passed through to the renderer.
    pub icon: Option<String>,
    /// `None` behaves like `Some(true)`.
    pub is_free_action: Option<bool>,
    pub(crate) action: Arc<dyn RowAction>,
}

impl CustomAction {
    /// Creates a free action.
    pub fn new<A: RowAction + 'static>(name: impl Into<String>, action: A) -> Self {
        Self {
            name: name.into(),
            icon: None,
            is_free_action: None,
            action: Arc::new(action),
        }
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks the action as free or confirmed.
    pub fn free(mut self, is_free: bool) -> Self {
        self.is_free_action = Some(is_free);
        self
    }

    /// Returns `true` if the action skips confirmation.
    pub fn is_free(&self) -> bool {
        self.is_free_action.unwrap_or(true)
    }

    /// Returns the icon, falling back to the name.
    pub fn label(&self) -> &str {
        self.icon.as_deref().unwrap_or(&self.name)
    }
}

impl std::fmt::Debug for CustomAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomAction")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("is_free_action", &self.is_free_action)
            .finish_non_exhaustive()
    }
}

/// Handlers for every action a grid offers.
#[derive(Clone, Default)]
pub struct ActionSet {
    pub(crate) on_create: Option<Arc<dyn RowAction>>,
    pub(crate) on_update: Option<Arc<dyn RowAction>>,
    pub(crate) on_delete: Option<Arc<dyn RowAction>>,
    pub(crate) custom: Vec<CustomAction>,
}

impl ActionSet {
    /// Looks up the handler for `kind`.
    pub fn handler(&self, kind: ActionKind) -> Option<Arc<dyn RowAction>> {
        match kind {
            ActionKind::Create => self.on_create.clone(),
            ActionKind::Update => self.on_update.clone(),
            ActionKind::Delete => self.on_delete.clone(),
            ActionKind::Custom(index) => self.custom.get(index).map(|c| c.action.clone()),
        }
    }

    /// Returns `true` if `kind` goes through the confirmation step.
    pub fn needs_confirmation(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Create => false,
            ActionKind::Update | ActionKind::Delete => true,
            ActionKind::Custom(index) => self.custom.get(index).is_some_and(|c| !c.is_free()),
        }
    }

    /// Returns `true` if a create handler is configured.
    pub fn can_create(&self) -> bool {
        self.on_create.is_some()
    }

    /// The configured custom actions, in order.
    pub fn custom(&self) -> &[CustomAction] {
        &self.custom
    }

    /// Returns `true` if rows need an actions cell.
    pub fn has_row_actions(&self) -> bool {
        self.on_update.is_some() || self.on_delete.is_some() || !self.custom.is_empty()
    }

    /// The actions offered on each row, in display order.
    pub fn row_actions(&self) -> Vec<ActionKind> {
        let mut kinds = Vec::new();
        if self.on_update.is_some() {
            kinds.push(ActionKind::Update);
        }
        if self.on_delete.is_some() {
            kinds.push(ActionKind::Delete);
        }
        kinds.extend((0..self.custom.len()).map(ActionKind::Custom));
        kinds
    }
}

impl std::fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSet")
            .field("on_create", &self.on_create.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("custom", &self.custom)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RemoteError;
    use crate::model::Row;

    use super::*;

    async fn noop(_row: Row) -> Result<(), RemoteError> {
        Ok(())
    }

    #[test]
    fn test_custom_actions_default_to_free() {
        let action = CustomAction::new("Archive", noop);
        assert!(action.is_free());
        assert_eq!(action.label(), "Archive");
        assert!(!action.free(false).is_free());
    }

    #[test]
    fn test_confirmation_routing() {
        let set = ActionSet {
            on_delete: Some(Arc::new(noop)),
            custom: vec![
                CustomAction::new("Open", noop),
                CustomAction::new("Purge", noop).free(false).icon("trash"),
            ],
            ..Default::default()
        };
        assert!(set.needs_confirmation(ActionKind::Delete));
        assert!(!set.needs_confirmation(ActionKind::Create));
        assert!(!set.needs_confirmation(ActionKind::Custom(0)));
        assert!(set.needs_confirmation(ActionKind::Custom(1)));
        assert!(set.handler(ActionKind::Update).is_none());
        assert!(set.handler(ActionKind::Custom(1)).is_some());
        assert_eq!(
            set.row_actions(),
            vec![ActionKind::Delete, ActionKind::Custom(0), ActionKind::Custom(1)]
        );
    }
}

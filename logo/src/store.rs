//! Recent-works collection and the current selection.
//!
//! The selection is an id into the collection rather than a copy of the
//! work, so edits made through [`WorkStore::selected_mut`] are the edits seen
//! by the list. Names are unique across the collection.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::EditorError;
use crate::work::{Work, WorkId};

/// Insertion-ordered saved works plus the work open for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkStore {
    works: Vec<Work>,
    selected: Option<WorkId>,
}

impl WorkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new work with default styling.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyName`] if `name` is blank, or
    /// [`EditorError::DuplicateName`] if a work already uses it.
    pub fn create(&mut self, name: &str) -> Result<WorkId, EditorError> {
        let name = self.check_name(name, None)?;
        let work = Work::new(name);
        let id = work.id;
        self.works.push(work);
        Ok(id)
    }

    /// Look up a work by name.
    #[must_use]
    pub fn get_recent_work(&self, name: &str) -> Option<&Work> {
        self.works.iter().find(|w| w.name == name)
    }

    #[must_use]
    pub fn get(&self, id: WorkId) -> Option<&Work> {
        self.works.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WorkId) -> Option<&mut Work> {
        self.works.iter_mut().find(|w| w.id == id)
    }

    /// Remove a work, clearing the selection if it pointed at it.
    pub fn remove_work(&mut self, id: WorkId) -> Option<Work> {
        let index = self.works.iter().position(|w| w.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.works.remove(index))
    }

    /// Rename a work. Renaming to its current name is accepted.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyName`] or [`EditorError::DuplicateName`] as for
    /// [`WorkStore::create`]; the work keeps its old name.
    pub fn update_list_name(&mut self, id: WorkId, name: &str) -> Result<(), EditorError> {
        let name = self.check_name(name, Some(id))?;
        let work = self.get_mut(id).ok_or(EditorError::NoSelection)?;
        work.name = name;
        Ok(())
    }

    /// Make the work with `id` the one being edited.
    pub fn select(&mut self, id: WorkId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<WorkId> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Work> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Work> {
        let id = self.selected?;
        self.get_mut(id)
    }

    /// Saved works in insertion order.
    #[must_use]
    pub fn recent_work(&self) -> &[Work] {
        &self.works
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    fn check_name(&self, name: &str, exclude: Option<WorkId>) -> Result<String, EditorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        if self.works.iter().any(|w| w.name == name && Some(w.id) != exclude) {
            return Err(EditorError::DuplicateName { name: name.to_owned() });
        }
        Ok(name.to_owned())
    }
}

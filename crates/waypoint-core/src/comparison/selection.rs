//! Which destinations are lined up for comparison.

use serde::{Deserialize, Serialize};

use super::catalog::find_destination;

/// Most destinations that can be compared at once.
pub const MAX_SELECTED: usize = 3;
/// Fewest destinations a comparison needs.
pub const MIN_TO_COMPARE: usize = 2;

/// Outcome of [`DestinationSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// Already at [`MAX_SELECTED`]; nothing changed.
    Full,
    /// Not a known destination id; nothing changed.
    Unknown,
}

impl SelectionChange {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSelection {
    ids: Vec<String>,
}

impl DestinationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Selects a destination, or deselects it when already selected.
    pub fn toggle(&mut self, id: &str) -> SelectionChange {
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
            return SelectionChange::Removed;
        }
        if find_destination(id).is_none() {
            return SelectionChange::Unknown;
        }
        if self.ids.len() >= MAX_SELECTED {
            return SelectionChange::Full;
        }
        self.ids.push(id.to_string());
        SelectionChange::Added
    }

    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_TO_COMPARE
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_caps_at_three() {
        let mut selection = DestinationSelection::new();
        assert_eq!(selection.toggle("caribbean"), SelectionChange::Added);
        assert_eq!(selection.toggle("bermuda"), SelectionChange::Added);
        assert_eq!(selection.toggle("hawaii"), SelectionChange::Added);
        assert_eq!(selection.toggle("europe"), SelectionChange::Full);
        assert_eq!(selection.ids(), ["caribbean", "bermuda", "hawaii"]);

        assert_eq!(selection.toggle("bermuda"), SelectionChange::Removed);
        assert_eq!(selection.toggle("europe"), SelectionChange::Added);
        assert_eq!(selection.ids(), ["caribbean", "hawaii", "europe"]);
    }

    #[test]
    fn test_unknown_destination() {
        let mut selection = DestinationSelection::new();
        assert_eq!(selection.toggle("atlantis"), SelectionChange::Unknown);
        assert!(!SelectionChange::Unknown.changed());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_compare_needs_two() {
        let mut selection = DestinationSelection::new();
        selection.toggle("mexico");
        assert!(!selection.can_compare());
        selection.toggle("bahamas");
        assert!(selection.can_compare());
        selection.clear();
        assert!(!selection.can_compare());
    }
}

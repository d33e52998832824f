//! Editable working copy of a plan's line items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{CategoryGroup, LineDetail, LineItem};

/// Category used for hand-added rows when the caller gives none.
pub const DEFAULT_CUSTOM_CATEGORY: &str = "Custom";

/// The in-memory collection a planner edits.
///
/// Items keep insertion order. Ids handed out by the derivation step come from
/// a counter (`item-0`, `item-1`, ...); rows the user adds get a random
/// `custom-` id, so the two never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList<D> {
    items: Vec<LineItem<D>>,
    #[serde(default)]
    next_id: u64,
}

impl<D> Default for ItemList<D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }
}

impl<D> ItemList<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LineItem<D>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem<D>> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem<D>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut LineItem<D>> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Exact, case-sensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Appends a template row unconditionally and returns its id.
    pub fn push_template(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        detail: D,
    ) -> String {
        let id = format!("item-{}", self.next_id);
        self.next_id += 1;
        self.items
            .push(LineItem::new(id.clone(), name, category, detail));
        id
    }

    /// Appends a template row unless an item with the same name is already
    /// present. The first occurrence always wins.
    pub fn push_template_unique(
        &mut self,
        name: &str,
        category: impl Into<String>,
        detail: D,
    ) -> bool {
        if self.contains_name(name) {
            return false;
        }
        self.push_template(name, category, detail);
        true
    }

    /// Flips the checked flag of one item. Unknown ids are ignored.
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Sets the checked flag of every item in `category`.
    ///
    /// Returns how many items actually changed state.
    pub fn bulk_check_category(&mut self, category: &str, value: bool) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| item.category == category) {
            if item.checked != value {
                item.checked = value;
                changed += 1;
            }
        }
        changed
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Renames one item. Blank names are rejected.
    pub fn rename_item(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(item) => {
                item.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&LineItem<D>) -> bool) {
        self.items.retain(keep);
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut LineItem<D>> {
        self.items.iter_mut()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Percentage of checked items, rounded. An empty list reports 0.
    pub fn progress_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.checked_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u8
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Partitions the list by category label.
    ///
    /// Groups appear in order of first appearance and items keep list order
    /// inside each group; every item lands in exactly one group.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_, D>> {
        let mut groups: Vec<CategoryGroup<'_, D>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|group| group.name == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    name: &item.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    /// Case-insensitive substring search on item names.
    pub fn filter(&self, term: &str) -> Vec<&LineItem<D>> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl<D: LineDetail> ItemList<D> {
    /// Writes one numeric field of one item. Unknown ids are ignored.
    pub fn update_field(&mut self, id: &str, field: D::Field, value: f64) -> bool {
        match self.get_mut(id) {
            Some(item) => item.detail.set_field(field, value),
            None => false,
        }
    }

    /// Appends a user-entered row at the end of the list.
    ///
    /// Returns the new id, or `None` when the name is blank.
    pub fn add_custom_item(&mut self, name: &str, category: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let category = match category.trim() {
            "" => DEFAULT_CUSTOM_CATEGORY,
            label => label,
        };
        let id = format!("custom-{}", Uuid::new_v4());
        self.items
            .push(LineItem::new(id.clone(), name, category, D::custom()));
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Qty(f64);

    #[derive(Debug, Clone, Copy)]
    struct QtyField;

    impl LineDetail for Qty {
        type Field = QtyField;

        fn set_field(&mut self, _field: QtyField, value: f64) -> bool {
            if value < 0.0 {
                return false;
            }
            self.0 = value;
            true
        }

        fn custom() -> Self {
            Qty(0.0)
        }
    }

    fn sample() -> ItemList<Qty> {
        let mut list = ItemList::new();
        list.push_template("Passport", "Documents", Qty(1.0));
        list.push_template("Boarding Pass", "Documents", Qty(1.0));
        list.push_template("Swimwear", "Clothing", Qty(2.0));
        list.push_template("Visa", "Documents", Qty(1.0));
        list
    }

    #[test]
    fn test_derived_ids_are_sequential() {
        let list = sample();
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item-0", "item-1", "item-2", "item-3"]);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = sample();
        assert!(list.toggle_checked("item-1"));
        assert!(list.get("item-1").unwrap().checked);
        assert!(list.toggle_checked("item-1"));
        assert!(!list.get("item-1").unwrap().checked);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = sample();
        let before = list.clone();
        assert!(!list.toggle_checked("missing"));
        assert_eq!(list, before);
    }

    #[test]
    fn test_custom_item_rejects_blank_name() {
        let mut list = sample();
        assert_eq!(list.add_custom_item("", "Documents"), None);
        assert_eq!(list.add_custom_item("   \t", "Documents"), None);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_custom_item_appends_unchecked_at_end() {
        let mut list = sample();
        let id = list.add_custom_item("  Snorkel  ", "Clothing").unwrap();
        let last = list.items().last().unwrap();
        assert_eq!(last.id, id);
        assert!(id.starts_with("custom-"));
        assert_eq!(last.name, "Snorkel");
        assert_eq!(last.category, "Clothing");
        assert!(!last.checked);
        assert_eq!(last.detail, Qty(0.0));
    }

    #[test]
    fn test_custom_item_without_category_uses_default() {
        let mut list = sample();
        let id = list.add_custom_item("Gift", " ").unwrap();
        assert_eq!(list.get(&id).unwrap().category, DEFAULT_CUSTOM_CATEGORY);
    }

    #[test]
    fn test_remove_item() {
        let mut list = sample();
        assert!(list.remove_item("item-2"));
        assert!(!list.remove_item("item-2"));
        assert_eq!(list.len(), 3);
        assert!(!list.categories().contains(&"Clothing"));
    }

    #[test]
    fn test_bulk_check_only_touches_category() {
        let mut list = sample();
        assert_eq!(list.bulk_check_category("Documents", true), 3);
        assert!(!list.get("item-2").unwrap().checked);
        assert_eq!(list.checked_count(), 3);
        assert_eq!(list.bulk_check_category("Documents", true), 0);
        assert_eq!(list.bulk_check_category("Documents", false), 3);
        assert_eq!(list.checked_count(), 0);
    }

    #[test]
    fn test_update_field() {
        let mut list = sample();
        assert!(list.update_field("item-2", QtyField, 4.0));
        assert_eq!(list.get("item-2").unwrap().detail, Qty(4.0));
        assert!(!list.update_field("item-2", QtyField, -1.0));
        assert!(!list.update_field("nope", QtyField, 1.0));
    }

    #[test]
    fn test_push_template_unique_keeps_first() {
        let mut list = sample();
        assert!(!list.push_template_unique("Swimwear", "Beach", Qty(9.0)));
        assert!(list.push_template_unique("swimwear", "Beach", Qty(9.0)));
        let swim = list.iter().find(|i| i.name == "Swimwear").unwrap();
        assert_eq!(swim.category, "Clothing");
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let mut list = sample();
        list.toggle_checked("item-0");
        list.toggle_checked("item-2");
        list.toggle_checked("item-3");

        let groups = list.group_by_category();
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Documents", "Clothing"]);

        let grouped_total: usize = groups.iter().map(|g| g.items.len()).sum();
        let grouped_checked: usize = groups.iter().map(|g| g.checked_count()).sum();
        assert_eq!(grouped_total, list.len());
        assert_eq!(grouped_checked, list.checked_count());

        let docs: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(docs, vec!["Passport", "Boarding Pass", "Visa"]);
        assert!(!groups[0].all_checked());
        assert!(groups[1].all_checked());
    }

    #[test]
    fn test_progress_percent() {
        let mut list = sample();
        assert_eq!(list.progress_percent(), 0);
        list.toggle_checked("item-0");
        assert_eq!(list.progress_percent(), 25);
        list.bulk_check_category("Documents", true);
        assert_eq!(list.progress_percent(), 75);
        assert_eq!(ItemList::<Qty>::new().progress_percent(), 0);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let list = sample();
        let hits: Vec<&str> = list.filter("PASS").iter().map(|i| i.name.as_str()).collect();
        assert_eq!(hits, vec!["Passport", "Boarding Pass"]);
    }

    #[test]
    fn test_rename_item() {
        let mut list = sample();
        assert!(list.rename_item("item-0", " Passport (valid 6 months) "));
        assert_eq!(list.get("item-0").unwrap().name, "Passport (valid 6 months)");
        assert!(!list.rename_item("item-0", "  "));
    }
}

//! Line item domain model.

use serde::{Deserialize, Serialize};

/// Tool-specific payload carried by every [`LineItem`].
///
/// Each planner stores different numbers on its rows (planned/actual amounts,
/// packing quantities, excursion prices). The list operations only need to
/// know how to update one named numeric field and how to build the payload of
/// a row the user typed in by hand.
pub trait LineDetail: Clone {
    /// Names the numeric fields the user may edit.
    type Field: Copy;

    /// Writes `value` into `field`. Returns `false` when the value is rejected.
    fn set_field(&mut self, field: Self::Field, value: f64) -> bool;

    /// Payload for a row added by the user: zero amounts, no template data.
    fn custom() -> Self;
}

/// One row of a derived plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem<D> {
    /// Unique within a session.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grouping label. Categories are computed from this field, never stored.
    pub category: String,
    /// Packed, booked or selected, depending on the tool.
    pub checked: bool,
    /// Tool-specific numbers and notes.
    pub detail: D,
}

impl<D> LineItem<D> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        detail: D,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            checked: false,
            detail,
        }
    }
}

/// A view of the items sharing one category label, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a, D> {
    pub name: &'a str,
    pub items: Vec<&'a LineItem<D>>,
}

impl<D> CategoryGroup<'_, D> {
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn all_checked(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.checked)
    }
}

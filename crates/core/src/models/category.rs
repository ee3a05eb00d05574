use serde::{Deserialize, Serialize};

/// A spending/income category.
///
/// Ids are stable strings (e.g., "cat_salary") shared between the
/// ledger, the chart datasets, and the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g., "cat_salary")
    pub id: String,

    /// Display name (e.g., "Salary", "Food & Dining")
    pub name: String,

    /// Hex color used for chart slices (e.g., "#10B981")
    pub color: String,

    /// Icon name for list rendering
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

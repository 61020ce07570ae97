//! Collection identifiers shared by the local store and the sync adapter.
//! The same key names the local `kv` row and the remote `category` column.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WorkEntries,
    Advances,
    Expenses,
    Settings,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WorkEntries,
        Category::Advances,
        Category::Expenses,
        Category::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::WorkEntries => "work_entries",
            Category::Advances => "advances",
            Category::Expenses => "expenses",
            Category::Settings => "settings",
        }
    }

    /// Remote rows come back keyed by string; unknown categories are
    /// ignored by the caller rather than erroring.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "work_entries" => Some(Category::WorkEntries),
            "advances" => Some(Category::Advances),
            "expenses" => Some(Category::Expenses),
            "settings" => Some(Category::Settings),
            _ => None,
        }
    }
}

/// Device-local scalars. Not part of the synced categories.
pub const KEY_LAST_NOTIFICATION: &str = "last_notification_date";
pub const KEY_ACCOUNT_OWNER: &str = "account_owner";

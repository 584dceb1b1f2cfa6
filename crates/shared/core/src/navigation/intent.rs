use serde::{Deserialize, Serialize};

/// Discrete paging decision derived from rotation history
///
/// The absence of a decision is `Option::<NavigationIntent>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Move to the next page
    Advance,
    /// Move to the previous page
    Retreat,
}

impl NavigationIntent {
    /// Returns the opposite intent
    pub fn opposite(&self) -> Self {
        match self {
            NavigationIntent::Advance => NavigationIntent::Retreat,
            NavigationIntent::Retreat => NavigationIntent::Advance,
        }
    }
}

impl std::fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationIntent::Advance => write!(f, "advance"),
            NavigationIntent::Retreat => write!(f, "retreat"),
        }
    }
}

//! Dashboard tab identifiers.

/// The three content tabs of the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Freedom,
    SelfImmolation,
}

impl Tab {
    /// All tabs in the order they appear in the selector.
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Freedom, Tab::SelfImmolation];

    /// Option value used by the tab selector.
    pub fn value(&self) -> &'static str {
        match self {
            Tab::Overview => "tab-home",
            Tab::Freedom => "tab-freedom",
            Tab::SelfImmolation => "tab-self-immolation",
        }
    }

    /// Label shown on the tab.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Freedom => "Freedom Visualization",
            Tab::SelfImmolation => "Self Immolation Visualization",
        }
    }

    /// Map a selector value back to a tab. Unknown values select nothing.
    pub fn from_value(value: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.value() == value)
    }

    /// Tab to show on page load for a URL fragment (without `#`). An empty
    /// or unknown fragment falls back to the default tab.
    pub fn from_fragment(fragment: &str) -> Tab {
        Tab::from_value(fragment).unwrap_or_default()
    }
}

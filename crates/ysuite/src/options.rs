/// Which suite layouts to enumerate under the suite root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutSelection {
    /// Flat suite first, then nested suite
    #[default]
    All,
    Flat,
    Nested,
}

impl LayoutSelection {
    pub fn includes_flat(self) -> bool {
        matches!(self, LayoutSelection::All | LayoutSelection::Flat)
    }

    pub fn includes_nested(self) -> bool {
        matches!(self, LayoutSelection::All | LayoutSelection::Nested)
    }
}

/// How flat-layout fixtures are judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlatCompare {
    /// First loaded document against the whole expected value
    #[default]
    FirstDocument,
    /// Every loaded document against a one-element expected sequence
    FullStream,
}

#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub layouts: LayoutSelection,
    /// Read fixture ids from `===` title files in nested fixture directories
    pub supports_titles: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            layouts: LayoutSelection::default(),
            supports_titles: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub flat_compare: FlatCompare,
}

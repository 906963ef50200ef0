//! Configuration types for the tree builder

/// Configuration for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Levels below the root to expand. `None` expands everything.
    pub max_depth: Option<usize>,
    /// Sort each listing by name. When off, children keep raw enumeration order.
    pub sort: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            sort: true,
        }
    }
}

impl ScanConfig {
    /// Build a config from a signed depth argument, where any negative value is unbounded.
    pub fn from_depth_arg(depth: i64) -> Self {
        Self {
            max_depth: usize::try_from(depth).ok(),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

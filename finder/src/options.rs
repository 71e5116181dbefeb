pub const DEFAULT_MAX_DEPTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// The maximum number of steps in a discovered path
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Options { max_depth }
    }

    /// Build options from an unvalidated max depth, as found in stored configuration. Anything
    /// which is missing or not a non-negative integer falls back to the default.
    pub fn from_raw_max_depth(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Options::default();
        };
        match raw.trim().parse::<usize>() {
            Ok(max_depth) => Options { max_depth },
            Err(_) => {
                log::warn!(
                    "maxDepth '{}' is not a number, set to {}",
                    raw,
                    DEFAULT_MAX_DEPTH
                );
                Options::default()
            }
        }
    }
}

use struson::reader::ReaderSettings;

pub const DEFAULT_SEPARATOR: char = '.';
pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 128;

/// Settings used when a [`Document`](crate::Document) is loaded and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Splits key paths into segments.
    pub separator: char,
    /// `None` disables the limit.
    pub max_nesting_depth: Option<u32>,
    /// Accept `//` and `/* */` comments in the document.
    pub allow_comments: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
            allow_comments: false,
        }
    }
}

impl ReaderOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: Option<u32>) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_comments(mut self, allow: bool) -> Self {
        self.allow_comments = allow;
        self
    }

    pub(crate) fn reader_settings(&self) -> ReaderSettings {
        let mut settings = ReaderSettings::default();
        settings.max_nesting_depth = self.max_nesting_depth;
        settings.allow_comments = self.allow_comments;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReaderOptions::default();
        assert_eq!(options.separator, '.');
        assert_eq!(options.max_nesting_depth, Some(128));
        assert!(!options.allow_comments);
    }

    #[test]
    fn test_builder_methods() {
        let options = ReaderOptions::default()
            .with_separator('/')
            .with_max_nesting_depth(None)
            .with_comments(true);
        assert_eq!(options.separator, '/');
        assert_eq!(options.max_nesting_depth, None);
        assert!(options.allow_comments);
    }

    #[test]
    fn test_reader_settings_follow_options() {
        let settings = ReaderOptions::default()
            .with_max_nesting_depth(Some(4))
            .with_comments(true)
            .reader_settings();
        assert_eq!(settings.max_nesting_depth, Some(4));
        assert!(settings.allow_comments);
    }
}

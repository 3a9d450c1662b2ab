//! Rendering options for Markdown output.

/// Default recursion ceiling. Real documents rarely nest past 5 levels;
/// anything deeper is truncated with a placeholder.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Options for Markdown rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum tree depth to descend into before truncating.
    /// Nodes deeper than this render as the truncation placeholder.
    pub max_depth: usize,

    /// Glyph for unordered list items.
    /// Default: '•'
    pub bullet_marker: char,

    /// Whether to prefix link/card URLs with a contextual emoji.
    /// When disabled, the bare URL is emitted.
    pub decorate_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            bullet_marker: '•',
            decorate_links: true,
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recursion ceiling (minimum 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Sets the unordered list glyph.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }

    /// Disables emoji decoration of link targets.
    pub fn without_link_decoration(mut self) -> Self {
        self.decorate_links = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.bullet_marker, '•');
        assert!(options.decorate_links);
    }

    #[test]
    fn test_max_depth_clamped_to_one() {
        let options = RenderOptions::default().with_max_depth(0);
        assert_eq!(options.max_depth, 1);
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_max_depth(4)
            .with_bullet_marker('-')
            .without_link_decoration();

        assert_eq!(options.max_depth, 4);
        assert_eq!(options.bullet_marker, '-');
        assert!(!options.decorate_links);
    }
}

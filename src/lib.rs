//! # unadf
//!
//! A library for converting Atlassian Document Format (ADF) rich-text
//! trees into Markdown.
//!
//! ADF is the nested node/mark/attribute representation used by Atlassian
//! APIs for issue descriptions and comments. A description field may arrive
//! as an ADF tree, an already-rendered string, or `null`; this crate
//! normalizes all three and renders trees through a recursive,
//! depth-guarded walk. Conversion never fails on merely-unexpected input:
//! unknown node types pass their children through, unknown marks are
//! skipped, and undecodable values degrade to their re-serialized text.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! fn main() -> unadf::Result<()> {
//!     let description = json!({
//!         "type": "doc",
//!         "content": [
//!             {"type": "heading", "attrs": {"level": 2},
//!              "content": [{"type": "text", "text": "Summary"}]},
//!             {"type": "paragraph",
//!              "content": [{"type": "text", "text": "All good."}]}
//!         ]
//!     });
//!
//!     let markdown = unadf::convert(&description)?;
//!     assert_eq!(markdown, "## Summary\nAll good.\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `external` (default): delegation to an `adf2md` binary found on
//!   `PATH`, with the built-in renderer as the guaranteed fallback.

pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod render;

#[cfg(feature = "external")]
pub mod external;

// Re-exports
pub use error::{Error, Result};
pub use input::Input;
pub use model::{Mark, MarkType, Node};
pub use render::{render_markdown, MarkdownRenderer, RenderOptions, TRUNCATION_PLACEHOLDER};

#[cfg(feature = "external")]
pub use external::ExternalRenderer;

use serde_json::Value;

/// Output for inputs that carry no content at all.
pub const NO_DESCRIPTION: &str = "No description";

/// Converts a loosely-typed description value to Markdown with default
/// settings.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let markdown = unadf::convert(&json!(null))?;
/// assert_eq!(markdown, "No description");
/// # Ok::<(), unadf::Error>(())
/// ```
pub fn convert(value: &Value) -> Result<String> {
    Converter::new().convert(value)
}

/// Converts a raw JSON payload string to Markdown with default settings.
///
/// Text that is not valid JSON is treated as already-rendered content and
/// passed through unchanged.
pub fn convert_str(input: &str) -> Result<String> {
    Converter::new().convert_str(input)
}

/// Configurable converter.
///
/// Holds render options and the optional external-renderer handle. Each
/// conversion call is independent and side-effect free apart from the
/// optional subprocess delegation.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use unadf::Converter;
///
/// let converter = Converter::new()
///     .with_max_depth(6)
///     .with_bullet_marker('-');
///
/// let markdown = converter.convert(&json!("already rendered"))?;
/// assert_eq!(markdown, "already rendered");
/// # Ok::<(), unadf::Error>(())
/// ```
pub struct Converter {
    options: RenderOptions,
    #[cfg(feature = "external")]
    external: Option<ExternalRenderer>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Creates a converter with default options.
    ///
    /// With the `external` feature enabled this probes `PATH` for the
    /// `adf2md` binary once, at construction.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            #[cfg(feature = "external")]
            external: ExternalRenderer::detect(),
        }
    }

    /// Replaces the render options wholesale.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the recursion ceiling.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// Sets the unordered list glyph.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.options = self.options.with_bullet_marker(marker);
        self
    }

    /// Disables emoji decoration of link targets.
    pub fn without_link_decoration(mut self) -> Self {
        self.options = self.options.without_link_decoration();
        self
    }

    /// Uses a specific external renderer instead of the `PATH` probe.
    #[cfg(feature = "external")]
    pub fn with_external_renderer(mut self, renderer: ExternalRenderer) -> Self {
        self.external = Some(renderer);
        self
    }

    /// Disables external delegation; always uses the built-in renderer.
    #[cfg(feature = "external")]
    pub fn without_external(mut self) -> Self {
        self.external = None;
        self
    }

    /// Converts a loosely-typed description value to Markdown.
    pub fn convert(&self, value: &Value) -> Result<String> {
        match Input::classify(value) {
            Input::Empty => Ok(NO_DESCRIPTION.to_string()),
            Input::Raw(text) => Ok(text),
            Input::Tree(node) => {
                #[cfg(feature = "external")]
                if let Some(renderer) = &self.external {
                    let payload = serde_json::to_string(value)?;
                    if let Ok(markdown) = renderer.render(&payload) {
                        return Ok(markdown);
                    }
                    // Delegation failure is silent; the built-in renderer
                    // below is the guaranteed path.
                }

                Ok(render_markdown(&node, &self.options))
            }
        }
    }

    /// Converts a raw JSON payload string to Markdown.
    pub fn convert_str(&self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Ok(NO_DESCRIPTION.to_string());
        }
        match serde_json::from_str::<Value>(input) {
            Ok(value) => self.convert(&value),
            // Not JSON at all: already-rendered content.
            Err(_) => Ok(input.to_string()),
        }
    }
}

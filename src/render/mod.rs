//! Markdown rendering for ADF trees.

mod markdown;
mod options;

pub use markdown::{MarkdownRenderer, TRUNCATION_PLACEHOLDER};
pub use options::{RenderOptions, DEFAULT_MAX_DEPTH};

use crate::error::Result;
use crate::model::Node;
use std::io::Write;

/// Renders a node tree to Markdown.
pub fn render_markdown(node: &Node, options: &RenderOptions) -> String {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(node)
}

/// Renders a node tree to Markdown and writes it to a writer.
pub fn render_to_writer<W: Write>(
    node: &Node,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_markdown(node, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_writer() {
        let node = Node::container(
            "heading",
            vec![Node::text("Buffered")],
        )
        .with_attr("level", 2);

        let mut buf = Vec::new();
        render_to_writer(&node, &mut buf, &RenderOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "## Buffered\n");
    }

    #[test]
    fn test_render_markdown_matches_writer_output() {
        let node = Node::container("paragraph", vec![Node::text("same text")]);
        let options = RenderOptions::default();

        let mut buf = Vec::new();
        render_to_writer(&node, &mut buf, &options).unwrap();
        assert_eq!(buf, render_markdown(&node, &options).into_bytes());
    }
}

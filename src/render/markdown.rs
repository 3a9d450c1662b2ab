//! Markdown renderer implementation.

use super::RenderOptions;
use crate::format;
use crate::model::{MarkType, Node};

/// Placeholder emitted for subtrees past the recursion ceiling.
pub const TRUNCATION_PLACEHOLDER: &str = "[...]";

/// Markers that distinguish annotated paragraph lines (bullets, check
/// marks, decorated links, raw URLs) from plain header-like text.
const ANNOTATION_MARKERS: &[&str] = &["•", "✅", "❓", "🔗", "https://"];

/// Markdown renderer.
///
/// A pure recursive walk over an ADF tree. Every node type has a defined
/// rendering; unrecognized types pass their children through unchanged, and
/// depth past the configured ceiling truncates to [`TRUNCATION_PLACEHOLDER`]
/// so pathological or cyclic-looking input terminates.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a node (and its subtree) to Markdown.
    pub fn render(&self, node: &Node) -> String {
        self.render_node(node, 0, 0)
    }

    /// Renders a single node at the given tree depth and list nesting level.
    fn render_node(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        if depth > self.options.max_depth {
            return TRUNCATION_PLACEHOLDER.to_string();
        }

        match node.node_type.as_str() {
            "text" => render_text(node),
            "paragraph" => self.render_paragraph(node, depth, list_depth),
            "heading" => self.render_heading(node, depth, list_depth),
            "codeBlock" => self.render_code_block(node, depth, list_depth),
            "bulletList" => self.render_bullet_list(node, depth, list_depth),
            "orderedList" => self.render_ordered_list(node, depth, list_depth),
            "listItem" => self.render_list_item(node, depth, list_depth),
            "hardBreak" => "\n".to_string(),
            "mention" => render_mention(node),
            "link" => self.render_url(node, "href"),
            "inlineCard" => self.render_url(node, "url"),
            "image" => render_image(node),
            "emoji" => render_emoji(node),
            // Unknown types pass their children through with no added
            // formatting, so schema extensions degrade gracefully.
            _ => self.render_children(node, depth, list_depth),
        }
    }

    /// Concatenates the rendered children of a node.
    fn render_children(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let mut output = String::new();
        for child in &node.content {
            output.push_str(&self.render_node(child, depth + 1, list_depth));
        }
        output
    }

    fn render_paragraph(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let content = self.render_children(node, depth, list_depth);

        // Adjacent bold spans leave four (or, after one collapse, three)
        // consecutive asterisks at the seam.
        let content = content.replace("****", "").replace("***", "*");

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        // Annotated lines carry bullet/check/link markers or a raw URL;
        // anything else is header-like text. Both branches currently emit
        // the same trailing newline; downstream formatting has not been
        // confirmed to never diverge, so the split stays.
        if is_annotated_line(trimmed) {
            format!("{trimmed}\n")
        } else {
            format!("{trimmed}\n")
        }
    }

    fn render_heading(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let content = self.render_children(node, depth, list_depth);
        let level = node.attr_number("level").map(|l| l as usize).unwrap_or(1);
        format!("{} {content}\n", "#".repeat(level))
    }

    fn render_code_block(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let content = self.render_children(node, depth, list_depth);
        let language = node.attr_str("language").unwrap_or("");
        format!("```{language}\n{content}\n```\n")
    }

    fn render_bullet_list(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let mut output = String::new();
        for (i, child) in node.content.iter().enumerate() {
            output.push_str(&self.render_node(child, depth + 1, list_depth + 1));
            // Newline between items only, never after the last one.
            if i < node.content.len() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn render_ordered_list(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        let mut output = String::new();
        for (i, child) in node.content.iter().enumerate() {
            let item = self.render_node(child, depth + 1, list_depth + 1);
            let item = item.trim_end_matches('\n');
            // Numbering is 1-based and restarts for every list node.
            output.push_str(&format!("{}. {item}", i + 1));
            if i < node.content.len() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn render_list_item(&self, node: &Node, depth: usize, list_depth: usize) -> String {
        // The nesting level was already incremented by the parent list.
        let content = self.render_children(node, depth, list_depth);
        let content = content.trim_end_matches('\n');
        let indent = "  ".repeat(list_depth);
        format!("{indent}{} {content}", self.options.bullet_marker)
    }

    fn render_url(&self, node: &Node, key: &str) -> String {
        match node.attr_str(key) {
            Some(url) if self.options.decorate_links => format::auto_decorate(url),
            Some(url) => url.to_string(),
            None if self.options.decorate_links => {
                format::decorate("unknown", format::ContentKind::Url)
            }
            None => "unknown".to_string(),
        }
    }
}

/// Renders a text node, folding marks left-to-right so each mark wraps the
/// prior result.
fn render_text(node: &Node) -> String {
    let mut text = node.text.clone();
    for mark in &node.marks {
        text = match mark.mark_type {
            MarkType::Strong => format!("**{text}**"),
            MarkType::Em => format!("*{text}*"),
            MarkType::Code => format!("`{text}`"),
            MarkType::Other => text,
        };
    }
    text
}

fn render_mention(node: &Node) -> String {
    node.attr_str("text")
        .or_else(|| node.attr_str("displayName"))
        .unwrap_or("@unknown")
        .to_string()
}

fn render_image(node: &Node) -> String {
    match node.attr_str("src") {
        Some(src) if !src.is_empty() => {
            let alt = node.attr_str("alt").unwrap_or("Image");
            format!("![{alt}]({src})")
        }
        _ => "@image".to_string(),
    }
}

fn render_emoji(node: &Node) -> String {
    if let Some(text) = node.attr_str("text") {
        return text.to_string();
    }
    if let Some(short_name) = node.attr_str("shortName") {
        return format!(":{short_name}:");
    }
    ":unknown:".to_string()
}

fn is_annotated_line(text: &str) -> bool {
    ANNOTATION_MARKERS.iter().any(|m| text.contains(m))
}

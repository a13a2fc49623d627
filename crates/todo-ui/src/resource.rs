//! The `UiResource` envelope and the mode-dispatching builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use todo_types::Todo;

use crate::{markup, tree};

/// URI under which the todo list UI is published.
pub const TODO_LIST_UI_URI: &str = "ui://todo/list";

/// MIME type of markup-mode resources.
pub const HTML_MIME_TYPE: &str = "text/html";

/// MIME type of tree-mode resources.
pub const TREE_MIME_TYPE: &str = "application/vnd.mcp-ui.tree+json";

/// Which shape of UI description to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// HTML document with an embedded event-posting script.
    #[default]
    Markup,
    /// Declarative node tree.
    Tree,
}

/// Returned when a string names no known [`UiMode`].
#[derive(Debug, Error)]
#[error("unknown ui mode '{0}' (expected 'markup' or 'tree')")]
pub struct ParseUiModeError(String);

impl FromStr for UiMode {
    type Err = ParseUiModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markup" | "html" => Ok(Self::Markup),
            "tree" | "json" => Ok(Self::Tree),
            other => Err(ParseUiModeError(other.to_string())),
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => f.write_str("markup"),
            Self::Tree => f.write_str("tree"),
        }
    }
}

/// Presentation options shared by both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    /// Preferred frame width hint for the host (CSS length).
    pub frame_width: String,
    /// Preferred frame height hint for the host (CSS length).
    pub frame_height: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            frame_width: "500px".to_string(),
            frame_height: "600px".to_string(),
        }
    }
}

/// Body of a UI resource, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiContent {
    /// A complete HTML document.
    #[serde(rename = "rawHtml")]
    RawHtml {
        #[serde(rename = "htmlString")]
        html_string: String,
    },
    /// A declarative node tree.
    #[serde(rename = "json")]
    Tree { ui: tree::UiNode },
}

/// How the content is encoded when embedded as MCP resource text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Embedded as-is.
    Text,
    /// Serialized to JSON text.
    Json,
}

/// Rendering hints for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiMetadata {
    /// `[width, height]` the host should give the frame.
    #[serde(rename = "preferred-frame-size")]
    pub preferred_frame_size: [String; 2],
    /// Data handed to the UI on first render (always empty here).
    #[serde(rename = "initial-render-data")]
    pub initial_render_data: Value,
}

/// A renderable description of the todo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiResource {
    /// Resource URI (`ui://todo/list`).
    pub uri: String,
    /// The markup or tree.
    pub content: UiContent,
    /// Text encoding of `content`.
    pub encoding: Encoding,
    /// Host rendering hints.
    pub ui_metadata: UiMetadata,
}

impl UiResource {
    /// MIME type matching the content shape.
    pub fn mime_type(&self) -> &'static str {
        match self.content {
            UiContent::RawHtml { .. } => HTML_MIME_TYPE,
            UiContent::Tree { .. } => TREE_MIME_TYPE,
        }
    }

    /// The content as a single text blob, for MCP `resource.text`.
    pub fn text(&self) -> Result<String, serde_json::Error> {
        match &self.content {
            UiContent::RawHtml { html_string } => Ok(html_string.clone()),
            UiContent::Tree { ui } => serde_json::to_string(ui),
        }
    }

    /// Returns the HTML document, if this is a markup resource.
    pub fn html(&self) -> Option<&str> {
        match &self.content {
            UiContent::RawHtml { html_string } => Some(html_string),
            UiContent::Tree { .. } => None,
        }
    }

    /// Returns the node tree, if this is a tree resource.
    pub fn tree(&self) -> Option<&tree::UiNode> {
        match &self.content {
            UiContent::RawHtml { .. } => None,
            UiContent::Tree { ui } => Some(ui),
        }
    }
}

/// Turns the current todo list into a [`UiResource`].
///
/// Holds only configuration; every call re-derives the output from the
/// todos it is given.
#[derive(Debug, Clone, Default)]
pub struct UiBuilder {
    mode: UiMode,
    options: UiOptions,
}

impl UiBuilder {
    /// Creates a builder for the given mode.
    pub fn new(mode: UiMode, options: UiOptions) -> Self {
        Self { mode, options }
    }

    /// The configured mode.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Builds the resource for `todos`.
    pub fn build(&self, todos: &[Todo]) -> UiResource {
        let (content, encoding) = match self.mode {
            UiMode::Markup => (
                UiContent::RawHtml {
                    html_string: markup::render_document(todos),
                },
                Encoding::Text,
            ),
            UiMode::Tree => (
                UiContent::Tree {
                    ui: tree::build_tree(todos),
                },
                Encoding::Json,
            ),
        };

        UiResource {
            uri: TODO_LIST_UI_URI.to_string(),
            content,
            encoding,
            ui_metadata: UiMetadata {
                preferred_frame_size: [
                    self.options.frame_width.clone(),
                    self.options.frame_height.clone(),
                ],
                initial_render_data: Value::Object(Default::default()),
            },
        }
    }
}

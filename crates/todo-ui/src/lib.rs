//! # todo-ui
//!
//! Builds the renderable UI description of the todo list.
//!
//! Two shapes are supported: a self-contained HTML document whose script
//! posts tool calls to the hosting frame (`markup`), and a declarative
//! node tree interpreted by the host renderer (`tree`). Both are pure
//! functions of the todo slice.

pub mod markup;
pub mod resource;
pub mod tree;

pub use resource::{
    Encoding, UiBuilder, UiContent, UiMetadata, UiMode, UiOptions, UiResource,
    TODO_LIST_UI_URI,
};
pub use tree::{Style, UiAction, UiNode};

//! weavemark CLI - command-line interface library
//!
//! Thin glue over the pipeline crates: read a serialized AST or summary
//! tree, run transform + templatify, emit the render-tree as JSON.
//!
//! # Binary usage
//!
//! ```bash
//! # Markup AST in, render-tree out
//! weavemark markup document.json --output tree.json --pretty
//!
//! # Documentation summary in, render-tree out
//! weavemark summary api.json
//! ```

pub mod app;

pub use app::{markup_command, run_cli, summary_command};

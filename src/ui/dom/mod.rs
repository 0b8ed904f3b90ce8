//! Headless document model
//!
//! Just enough of a DOM for the console: ids, class lists, attributes,
//! inline styles, select options and container markup. Embedders mirror it
//! onto their real UI after each dispatched event.

mod document;
mod element;

pub use document::Document;
pub use element::{Element, NodeId, SelectOption};

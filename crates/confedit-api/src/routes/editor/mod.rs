//! Editor routes - the static editor page

pub mod page;

pub use page::page_editor;

//! Interactive behaviour for a static marketing page: smooth anchor
//! navigation, a remembered language toggle, an auto-advancing carousel and
//! a scroll-spy for the navigation bar.
//!
//! Features are written against the [`dom`] traits so they run unchanged in
//! the browser (`wasm32`), in the native preview, and against
//! [`dom::MemoryDocument`] in tests.

pub mod anchor;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod dom;
pub mod language;
pub mod page;
pub mod preferences;
pub mod scroll_spy;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::PageConfig;
pub use page::Page;

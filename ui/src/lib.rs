//! Shared UI crate for the WineSoft landing page.
//!
//! `core` holds the platform-agnostic logic (localization, binding, menu,
//! header and reveal state); `page` holds the Dioxus components built on it.

pub mod core;
pub mod page;

pub use page::LandingPage;

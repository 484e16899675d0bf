//! Platform-agnostic page logic: localization state, binding, loading,
//! persistence and the small scroll/menu/reveal state machines the page
//! components drive.

pub mod binder;
pub mod bundle;
pub mod config;
pub mod contact;
pub mod error;
pub mod header;
pub mod language;
pub mod loader;
pub mod localization;
pub mod navigation;
pub mod platform;
pub mod reveal;
pub mod storage;
pub mod timing;

//! Keypoint: a bilingual privacy-education site.
//!
//! Articles are listed in per-locale message catalogs and rendered into
//! pages by [`site::Site`], which the [`serve`] module exposes over HTTP and
//! [`engine::Engine`] writes out as a static site.

pub mod engine;
pub mod metadata;
pub mod render;
pub mod scaffold;
pub mod serve;
pub mod site;
pub mod store;
pub mod workspace;

pub(crate) mod utils;

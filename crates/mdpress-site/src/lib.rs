//! Page assembly and static asset handling for mdpress.
//!
//! This crate wraps the pure conversion core with the filesystem work a
//! site build needs: discovering content files, substituting rendered pages
//! into an HTML template, and copying static assets into the output tree.
//!
//! A build runs in two phases:
//! 1. [`copy_static`] rebuilds the output directory from the static tree.
//! 2. [`generate_pages`] converts every markdown file under the content
//!    directory into a templated HTML page at the mirrored output path.

mod assets;
mod generator;
mod template;

pub use assets::copy_static;
pub use generator::{BuildError, generate_page, generate_pages};
pub use template::apply_template;

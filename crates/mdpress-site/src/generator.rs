//! Page generation pipeline.
//!
//! Walks the content tree for markdown files, converts each one through the
//! renderer core, and writes templated HTML pages into a mirrored directory
//! structure. Conversions are independent per file, so the collected pages
//! are processed on the rayon thread pool.

use std::fs;
use std::path::{Path, PathBuf};

use mdpress_renderer::{ParseError, RenderError, TitleError, extract_title, markdown_to_node};
use rayon::prelude::*;

use crate::template::apply_template;

/// Error returned when site generation fails.
///
/// The first failing page aborts the whole run; no partial page is written
/// for a failed document.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// I/O error reading content or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Inline markup could not be split.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The node tree could not be rendered.
    #[error("{0}")]
    Render(#[from] RenderError),
    /// A document had no top-level heading.
    #[error("{0}")]
    Title(#[from] TitleError),
}

/// Generate a single HTML page from a markdown file.
///
/// Reads the source, converts it to HTML, extracts the title, substitutes
/// both into the template, and writes the result, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`BuildError`] on I/O failure or when conversion, rendering, or
/// title extraction fails.
pub fn generate_page(source: &Path, template: &str, dest: &Path) -> Result<(), BuildError> {
    tracing::info!(from = %source.display(), to = %dest.display(), "Generating page");

    let markdown = fs::read_to_string(source)?;
    let content = markdown_to_node(&markdown)?.render()?;
    let title = extract_title(&markdown)?;
    let page = apply_template(template, &title, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Generate HTML pages for every markdown file under a content directory.
///
/// The template is read once and shared. Each `.md` file maps to an `.html`
/// file at the same relative path under `output_dir`; other files are
/// ignored and hidden entries are skipped. Pages are generated in parallel.
///
/// Returns the number of pages generated.
///
/// # Errors
///
/// Returns [`BuildError`] for I/O failures and for the first page whose
/// conversion fails.
pub fn generate_pages(
    content_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
) -> Result<usize, BuildError> {
    let template = fs::read_to_string(template_path)?;

    let mut pages = Vec::new();
    collect_pages(content_dir, output_dir, &mut pages)?;
    tracing::debug!(page_count = pages.len(), "Content scan completed");

    pages
        .par_iter()
        .try_for_each(|(source, dest)| generate_page(source, &template, dest))?;

    Ok(pages.len())
}

/// Walk a content directory and pair each markdown file with its output path.
fn collect_pages(
    dir: &Path,
    dest_dir: &Path,
    pages: &mut Vec<(PathBuf, PathBuf)>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_pages(&path, &dest_dir.join(&name), pages)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(&name).with_extension("html");
            pages.push((path, dest));
        }
    }
    Ok(())
}

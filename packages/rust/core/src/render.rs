//! HTML page rendering and output.
//!
//! The page template is compiled in with `askama`. Rendering happens fully
//! in memory; the result replaces the output file in one rename.

use std::path::Path;

use askama::Template;
use tracing::{debug, info, instrument, warn};

use vitae_shared::{Event, Project, Publication, Result, SiteContent, TeachingEntry, VitaeError};

/// Name of the page template under `templates/`.
pub const INDEX_TEMPLATE: &str = "index.html.jinja";

/// The CV page. Field values already hold HTML entities, so nothing is
/// escaped.
#[derive(Template)]
#[template(path = "index.html.jinja", escape = "none")]
pub struct IndexPage<'a> {
    pub events: &'a [Event],
    pub projects: &'a [Project],
    pub teaching: &'a [TeachingEntry],
    pub publications: &'a [Publication],
}

impl<'a> From<&'a SiteContent> for IndexPage<'a> {
    fn from(content: &'a SiteContent) -> Self {
        Self {
            events: &content.events,
            projects: &content.projects,
            teaching: &content.teaching,
            publications: &content.publications,
        }
    }
}

/// Render the page for `content`.
#[instrument(skip_all, fields(template = INDEX_TEMPLATE))]
pub fn render_page(content: &SiteContent) -> Result<String> {
    let html = IndexPage::from(content)
        .render()
        .map_err(|e| VitaeError::Render(format!("{INDEX_TEMPLATE}: {e}")))?;

    debug!(bytes = html.len(), "page rendered");
    Ok(html)
}

/// Replace `path` with `html`.
///
/// Writes a temp file beside the target, then renames it over the target,
/// so a failed write never leaves a truncated page.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| VitaeError::io(dir, e))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| VitaeError::config(format!("{} is not a file path", path.display())))?;
    let temp = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    std::fs::write(&temp, html).map_err(|e| VitaeError::io(&temp, e))?;
    if let Err(e) = std::fs::rename(&temp, path) {
        if let Err(cleanup) = std::fs::remove_file(&temp) {
            warn!(temp = %temp.display(), error = %cleanup, "could not remove temp page");
        }
        return Err(VitaeError::io(path, e));
    }

    info!(bytes = html.len(), "wrote page");
    Ok(())
}

//! End-to-end build: data files → annotated records → rendered page.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, instrument};

use vitae_shared::{BuildConfig, Result, SiteContent};

use crate::aggregate::{merge_projects, merge_publications};
use crate::categories::{CategorySpec, EVENTS, GRANTS, PARTICIPATIONS, PUBLICATIONS, TEACHING};
use crate::loaders::{
    load_events, load_grants, load_participations, load_publications, load_teaching,
};
use crate::render::{render_page, write_page};

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the written page.
    pub output_path: PathBuf,
    pub event_count: usize,
    pub project_count: usize,
    pub teaching_count: usize,
    pub publication_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting build status.
pub trait ProgressReporter {
    /// Called after a data file has been loaded.
    fn category_loaded(&self, spec: &CategorySpec, count: usize);
    /// Called when the page has been written.
    fn done(&self, result: &BuildResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn category_loaded(&self, _spec: &CategorySpec, _count: usize) {}
    fn done(&self, _result: &BuildResult) {}
}

/// Load every data file under `data_dir` and order the lists for display.
///
/// Files are loaded one after another; the first failure aborts the load.
#[instrument(skip_all, fields(data_dir = %data_dir.display()))]
pub fn load_site(data_dir: &Path, progress: &dyn ProgressReporter) -> Result<SiteContent> {
    let events = load_events(data_dir)?;
    progress.category_loaded(&EVENTS, events.len());

    let grants = load_grants(data_dir)?;
    progress.category_loaded(&GRANTS, grants.len());

    let participations = load_participations(data_dir)?;
    progress.category_loaded(&PARTICIPATIONS, participations.len());

    let teaching = load_teaching(data_dir)?;
    progress.category_loaded(&TEACHING, teaching.len());

    let mut publication_lists = Vec::with_capacity(PUBLICATIONS.len());
    for source in &PUBLICATIONS {
        let publications = load_publications(data_dir, source)?;
        progress.category_loaded(&source.spec, publications.len());
        publication_lists.push(publications);
    }

    Ok(SiteContent {
        events,
        projects: merge_projects(grants, participations),
        teaching,
        publications: merge_publications(publication_lists),
    })
}

/// Run the full build.
///
/// 1. Load and annotate all categories
/// 2. Render the page in memory
/// 3. Replace the output file
///
/// Nothing is written unless every step before it succeeded.
#[instrument(skip_all, fields(output = %config.output_path.display()))]
pub fn build_site(config: &BuildConfig, progress: &dyn ProgressReporter) -> Result<BuildResult> {
    let start = Instant::now();
    info!(data_dir = %config.data_dir.display(), "starting build");

    let content = load_site(&config.data_dir, progress)?;
    let html = render_page(&content)?;
    write_page(&config.output_path, &html)?;

    let result = BuildResult {
        output_path: config.output_path.clone(),
        event_count: content.events.len(),
        project_count: content.projects.len(),
        teaching_count: content.teaching.len(),
        publication_count: content.publications.len(),
        elapsed: start.elapsed(),
    };

    info!(
        events = result.event_count,
        projects = result.project_count,
        teaching = result.teaching_count,
        publications = result.publication_count,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "build complete"
    );
    progress.done(&result);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use vitae_shared::{ProjectSource, PublicationType, VitaeError};

    use super::*;

    const FIXTURES: &str = "../../../fixtures/data";

    #[derive(Default)]
    struct Recorder {
        loaded: RefCell<Vec<(&'static str, usize)>>,
        finished: RefCell<bool>,
    }

    impl ProgressReporter for Recorder {
        fn category_loaded(&self, spec: &CategorySpec, count: usize) {
            self.loaded.borrow_mut().push((spec.name, count));
        }
        fn done(&self, _result: &BuildResult) {
            *self.finished.borrow_mut() = true;
        }
    }

    fn copy_fixtures(dest: &Path) {
        for entry in std::fs::read_dir(FIXTURES).expect("fixtures dir") {
            let entry = entry.expect("dir entry");
            std::fs::copy(entry.path(), dest.join(entry.file_name())).expect("copy fixture");
        }
    }

    #[test]
    fn fixture_site_loads_and_orders() {
        let content = load_site(Path::new(FIXTURES), &SilentProgress).expect("load fixtures");

        assert_eq!(content.events.len(), 2);
        let event = &content.events[0];
        assert_eq!(event.field("endofevent_as_ISO_8601"), "2021-09-15T00:00:00");
        assert_eq!(event.roles, vec!["General chair ", "Program committee"]);

        assert_eq!(content.projects.len(), 3);
        assert!(
            content
                .projects
                .windows(2)
                .all(|w| w[0].field("endofproject_as_ISO_8601")
                    <= w[1].field("endofproject_as_ISO_8601"))
        );
        assert_eq!(content.projects[0].source, ProjectSource::Participation);

        assert_eq!(content.teaching.len(), 2);

        assert_eq!(content.publications.len(), 6);
        assert!(content.publications.windows(2).all(|w| w[0].year <= w[1].year));
        let kinds: Vec<PublicationType> = content.publications.iter().map(|p| p.kind).collect();
        assert!(kinds.contains(&PublicationType::Book));
        assert!(kinds.contains(&PublicationType::Conference));
    }

    #[test]
    fn build_writes_page_and_reports() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = BuildConfig {
            data_dir: PathBuf::from(FIXTURES),
            output_path: dir.path().join("index.html"),
        };
        let recorder = Recorder::default();

        let result = build_site(&config, &recorder).expect("build");
        assert_eq!(result.event_count, 2);
        assert_eq!(result.publication_count, 6);

        let html = std::fs::read_to_string(&config.output_path).expect("read page");
        assert!(html.contains("Workshop on Ownership Types"));
        assert!(!html.contains("Withdrawn Workshop"));
        assert!(html.contains("&#8211;"));

        let loaded = recorder.loaded.borrow();
        assert_eq!(loaded.len(), 9);
        assert_eq!(loaded[0], ("events", 2));
        assert!(*recorder.finished.borrow());
    }

    #[test]
    fn failed_load_writes_nothing() {
        let data = tempfile::tempdir().expect("tempdir");
        copy_fixtures(data.path());
        std::fs::write(
            data.path().join(GRANTS.file_name),
            "grantdate;fundingbody;awardholders;endofproject\n2020;EU;Smith;2020-12-31\n",
        )
        .expect("overwrite grants");

        let out = tempfile::tempdir().expect("tempdir");
        let config = BuildConfig {
            data_dir: data.path().to_path_buf(),
            output_path: out.path().join("index.html"),
        };

        let err = build_site(&config, &SilentProgress).unwrap_err();
        assert!(matches!(err, VitaeError::Date { .. }));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn missing_data_file_is_fatal() {
        let data = tempfile::tempdir().expect("tempdir");
        copy_fixtures(data.path());
        std::fs::remove_file(data.path().join(TEACHING.file_name)).expect("remove");

        let err = load_site(data.path(), &SilentProgress).unwrap_err();
        assert!(matches!(err, VitaeError::Io { .. }));
    }
}

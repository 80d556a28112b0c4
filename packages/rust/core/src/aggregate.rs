//! Merging and ordering of per-file lists for display.

use vitae_shared::{Project, Publication};

/// Grants then participations, stable-sorted ascending by end date.
pub fn merge_projects(grants: Vec<Project>, participations: Vec<Project>) -> Vec<Project> {
    let mut projects = grants;
    projects.extend(participations);
    projects.sort_by(|a, b| a.ends_at.cmp(&b.ends_at));
    projects
}

/// All publication files in load order, stable-sorted ascending by the raw
/// year string.
///
/// The comparison is lexicographic, so it only orders correctly while every
/// year has four digits.
pub fn merge_publications(sources: impl IntoIterator<Item = Vec<Publication>>) -> Vec<Publication> {
    let mut publications: Vec<Publication> = sources.into_iter().flatten().collect();
    publications.sort_by(|a, b| a.year.cmp(&b.year));
    publications
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use vitae_shared::{ProjectRole, ProjectSource, PublicationType, Record};

    use super::*;

    fn record(title: &str) -> Record {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), title.to_string());
        Record::new(fields, "test.txt", 2)
    }

    fn project(title: &str, y: i32, m: u32, d: u32, source: ProjectSource) -> Project {
        Project {
            record: record(title),
            ends_at: NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            role: ProjectRole::Researcher,
            source,
        }
    }

    fn publication(title: &str, year: &str, kind: PublicationType) -> Publication {
        Publication {
            record: record(title),
            kind,
            year: year.to_string(),
        }
    }

    #[test]
    fn projects_sorted_by_end_date() {
        let grants = vec![
            project("g-late", 2024, 1, 1, ProjectSource::Grant),
            project("g-early", 2019, 6, 30, ProjectSource::Grant),
        ];
        let participations = vec![project("p-mid", 2021, 12, 31, ProjectSource::Participation)];

        let merged = merge_projects(grants, participations);
        let titles: Vec<&str> = merged.iter().map(|p| p.field("title")).collect();
        assert_eq!(titles, vec!["g-early", "p-mid", "g-late"]);
        assert!(merged.windows(2).all(|w| w[0].ends_at <= w[1].ends_at));
    }

    #[test]
    fn equal_end_dates_keep_grants_first() {
        let grants = vec![project("grant", 2022, 3, 1, ProjectSource::Grant)];
        let participations = vec![project("part", 2022, 3, 1, ProjectSource::Participation)];

        let merged = merge_projects(grants, participations);
        assert_eq!(merged[0].source, ProjectSource::Grant);
        assert_eq!(merged[1].source, ProjectSource::Participation);
    }

    #[test]
    fn publications_sorted_by_year_string() {
        let books = vec![publication("book-2020", "2020", PublicationType::Book)];
        let journals = vec![
            publication("j-2018", "2018", PublicationType::Journal),
            publication("j-2020", "2020", PublicationType::Journal),
        ];
        let conferences = vec![publication("c-2019", "2019", PublicationType::Conference)];

        let merged = merge_publications([books, journals, conferences]);
        let titles: Vec<&str> = merged.iter().map(|p| p.field("title")).collect();
        assert_eq!(titles, vec!["j-2018", "c-2019", "book-2020", "j-2020"]);
        assert!(merged.windows(2).all(|w| w[0].year <= w[1].year));
    }

    #[test]
    fn year_comparison_is_lexicographic() {
        let merged = merge_publications([vec![
            publication("four", "1999", PublicationType::Book),
            publication("three", "200", PublicationType::Book),
        ]]);
        assert_eq!(merged[0].field("title"), "four");
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge_projects(Vec::new(), Vec::new()).is_empty());
        assert!(merge_publications(Vec::<Vec<Publication>>::new()).is_empty());
    }
}

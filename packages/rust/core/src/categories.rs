//! Per-category loader configuration.
//!
//! Each data file is described by one static entry: where it lives, which
//! column marks a disabled row, and which columns get normalized.

use vitae_shared::PublicationType;

/// Prefix that comments out a row in any data file.
pub const DISABLED_MARKER: char = '%';

/// Loader configuration for one data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    /// Label used in logs and progress output.
    pub name: &'static str,
    /// File name inside the data directory.
    pub file_name: &'static str,
    /// Column whose `%` prefix disables the row.
    pub disabled_field: &'static str,
    /// Date column to canonicalize, if any.
    pub date_field: Option<&'static str>,
    /// Columns passed through `fix_latex`.
    pub cleaned_fields: &'static [&'static str],
}

pub const EVENTS: CategorySpec = CategorySpec {
    name: "events",
    file_name: "06-3-organization_events.txt",
    disabled_field: "endofevent",
    date_field: Some("endofevent"),
    cleaned_fields: &["role", "event"],
};

pub const GRANTS: CategorySpec = CategorySpec {
    name: "grants",
    file_name: "08-5-research_grants.txt",
    disabled_field: "grantdate",
    date_field: Some("endofproject"),
    cleaned_fields: &["fundingbody"],
};

pub const PARTICIPATIONS: CategorySpec = CategorySpec {
    name: "participations",
    file_name: "11-2-participation_research_projects.txt",
    disabled_field: "startofproject",
    date_field: Some("endofproject"),
    cleaned_fields: &["fundingbody"],
};

pub const TEACHING: CategorySpec = CategorySpec {
    name: "teaching",
    file_name: "05-1-teaching_experience.txt",
    disabled_field: "organization",
    date_field: None,
    cleaned_fields: &["course"],
};

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

const BOOK_FIELDS: &[&str] = &["authors", "titleofpublication", "doiorwebaddress"];
const CHAPTER_FIELDS: &[&str] = &["authors", "titleofpublication", "doiorwebaddress", "pages"];
const CONFERENCE_FIELDS: &[&str] = &[
    "authors",
    "titleofpublication",
    "doiorwebaddress",
    "dates",
    "acronym",
];
const JOURNAL_FIELDS: &[&str] = &[
    "authors",
    "titleofpublication",
    "titlejournal",
    "doiorwebaddress",
    "pages",
];

/// One of the five publication files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationSource {
    pub spec: CategorySpec,
    pub kind: PublicationType,
}

/// Publication files in load order.
pub const PUBLICATIONS: [PublicationSource; 5] = [
    PublicationSource {
        spec: CategorySpec {
            name: "books",
            file_name: "09-1-publications_book.txt",
            disabled_field: "starred",
            date_field: None,
            cleaned_fields: BOOK_FIELDS,
        },
        kind: PublicationType::Book,
    },
    PublicationSource {
        spec: CategorySpec {
            name: "chapters",
            file_name: "09-2-publications_chapter.txt",
            disabled_field: "starred",
            date_field: None,
            cleaned_fields: CHAPTER_FIELDS,
        },
        kind: PublicationType::Chapter,
    },
    PublicationSource {
        spec: CategorySpec {
            name: "conference papers",
            file_name: "09-3-publications_conference.txt",
            disabled_field: "starred",
            date_field: None,
            cleaned_fields: CONFERENCE_FIELDS,
        },
        kind: PublicationType::Conference,
    },
    PublicationSource {
        spec: CategorySpec {
            name: "academic journal articles",
            file_name: "09-4-publications_journal_academic.txt",
            disabled_field: "starred",
            date_field: None,
            cleaned_fields: JOURNAL_FIELDS,
        },
        kind: PublicationType::Journal,
    },
    PublicationSource {
        spec: CategorySpec {
            name: "professional journal articles",
            file_name: "09-5-publications_journal_professional.txt",
            // This file has no `starred` column.
            disabled_field: "authors",
            date_field: None,
            cleaned_fields: JOURNAL_FIELDS,
        },
        kind: PublicationType::Journal,
    },
];

/// Whether a disabled-field value comments the row out.
pub fn is_disabled(value: &str) -> bool {
    value.starts_with(DISABLED_MARKER)
}

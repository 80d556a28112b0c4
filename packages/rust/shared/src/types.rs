//! Record and domain types for the rendered CV page.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::error::{Result, VitaeError};

/// Suffix appended to a date column's name for its canonical form.
pub const ISO_8601_SUFFIX: &str = "_as_ISO_8601";

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One data row: every source column by header name, plus annotations.
///
/// Annotation is additive. [`Record::set`] inserts or overwrites a value but
/// nothing ever removes a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
    path: PathBuf,
    line: u64,
}

impl Record {
    /// Create a record for the row at `line` of `path`.
    pub fn new(fields: BTreeMap<String, String>, path: impl Into<PathBuf>, line: u64) -> Self {
        Self {
            fields,
            path: path.into(),
            line,
        }
    }

    /// Value of a column, if the row has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a column the caller cannot do without.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| VitaeError::MissingField {
            path: self.path.clone(),
            line: self.line,
            field: name.to_string(),
        })
    }

    /// Template-side accessor: absent columns render as empty.
    pub fn field(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Insert or overwrite a column.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Apply `f` to a required column in place.
    pub fn update(&mut self, name: &str, f: impl FnOnce(&str) -> String) -> Result<()> {
        let updated = f(self.require(name)?);
        self.set(name, updated);
        Ok(())
    }

    /// Whether the row has a column named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All columns, ordered by name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// 1-based line of the row in its source file.
    pub fn line(&self) -> u64 {
        self.line
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event the person helped organize.
#[derive(Debug, Clone)]
pub struct Event {
    pub record: Record,
    /// Canonical end of the event.
    pub ends_at: NaiveDateTime,
    /// Individual roles, split out of the combined `role` column.
    pub roles: Vec<String>,
}

impl Event {
    pub fn field(&self, name: &str) -> &str {
        self.record.field(name)
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Role held on a project, ordered by display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectRole {
    PrincipalInvestigator,
    CoInvestigator,
    Researcher,
}

impl ProjectRole {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PrincipalInvestigator => "Principal investigator",
            Self::CoInvestigator => "Co-Investigator",
            Self::Researcher => "Researcher",
        }
    }

    /// Numeric rank: 1 PI, 2 Co-I, 3 researcher.
    pub fn rank(self) -> u8 {
        match self {
            Self::PrincipalInvestigator => 1,
            Self::CoInvestigator => 2,
            Self::Researcher => 3,
        }
    }
}

/// Which data file a project came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    Grant,
    Participation,
}

/// A funded grant or a participation in someone else's project.
#[derive(Debug, Clone)]
pub struct Project {
    pub record: Record,
    /// Canonical end of the project; the project list is sorted on it.
    pub ends_at: NaiveDateTime,
    pub role: ProjectRole,
    pub source: ProjectSource,
}

impl Project {
    pub fn field(&self, name: &str) -> &str {
        self.record.field(name)
    }

    pub fn role_name(&self) -> &'static str {
        self.role.label()
    }

    pub fn role_type(&self) -> u8 {
        self.role.rank()
    }
}

// ---------------------------------------------------------------------------
// Teaching
// ---------------------------------------------------------------------------

/// A course taught. Both flags may be set at once.
#[derive(Debug, Clone)]
pub struct TeachingEntry {
    pub record: Record,
    pub is_lecturer: bool,
    pub is_teaching_assistant: bool,
}

impl TeachingEntry {
    pub fn field(&self, name: &str) -> &str {
        self.record.field(name)
    }
}

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

/// Publication type. Academic and professional journals share `Journal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationType {
    Book,
    Chapter,
    Conference,
    Journal,
}

impl PublicationType {
    /// Numeric type code (1 book, 2 chapter, 3 conference, 4 journal).
    pub fn code(self) -> u8 {
        match self {
            Self::Book => 1,
            Self::Chapter => 2,
            Self::Conference => 3,
            Self::Journal => 4,
        }
    }
}

/// A publication from any of the five publication files.
#[derive(Debug, Clone)]
pub struct Publication {
    pub record: Record,
    pub kind: PublicationType,
    /// Raw `yearofpublication`; the list is sorted on it as a string.
    pub year: String,
}

impl Publication {
    pub fn field(&self, name: &str) -> &str {
        self.record.field(name)
    }

    pub fn type_code(&self) -> u8 {
        self.kind.code()
    }
}

// ---------------------------------------------------------------------------
// SiteContent
// ---------------------------------------------------------------------------

/// Everything the page template renders, already ordered for display.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    /// File order.
    pub events: Vec<Event>,
    /// Grants and participations, ascending by end date.
    pub projects: Vec<Project>,
    /// File order.
    pub teaching: Vec<TeachingEntry>,
    /// All publication types, ascending by raw year string.
    pub publications: Vec<Publication>,
}

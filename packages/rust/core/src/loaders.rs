//! Category loaders: read a data file, drop disabled rows, annotate the rest.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info, instrument};

use vitae_markup::{fix_latex, split_roles, strip_parentheticals};
use vitae_shared::{
    Event, Project, ProjectRole, ProjectSource, Publication, Record, Result, TeachingEntry,
    VitaeError,
};

use crate::categories::{
    CategorySpec, EVENTS, GRANTS, PARTICIPATIONS, PublicationSource, TEACHING, is_disabled,
};
use crate::dates::annotate_date;
use crate::reader::read_records;

/// Load one data file with the steps every category shares.
///
/// For each enabled row, in file order: canonicalize the date column,
/// normalize the cleaned columns, then hand the row to `derive`.
#[instrument(skip_all, fields(category = spec.name))]
pub fn load_category<T>(
    data_dir: &Path,
    spec: &CategorySpec,
    mut derive: impl FnMut(Record, Option<NaiveDateTime>) -> Result<T>,
) -> Result<Vec<T>> {
    let path = data_dir.join(spec.file_name);
    let rows = read_records(&path)?;
    let total = rows.len();

    let mut items = Vec::with_capacity(total);
    for mut record in rows {
        if is_disabled(record.require(spec.disabled_field)?) {
            debug!(line = record.line(), "skipping disabled row");
            continue;
        }

        let date = spec
            .date_field
            .map(|field| annotate_date(&mut record, field))
            .transpose()?;

        for field in spec.cleaned_fields {
            record.update(field, fix_latex)?;
        }

        items.push(derive(record, date)?);
    }

    info!(
        file = spec.file_name,
        kept = items.len(),
        skipped = total - items.len(),
        "category loaded"
    );
    Ok(items)
}

fn dated(spec: &CategorySpec, date: Option<NaiveDateTime>) -> Result<NaiveDateTime> {
    date.ok_or_else(|| VitaeError::config(format!("{} has no date column", spec.name)))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Load organized events, in file order.
pub fn load_events(data_dir: &Path) -> Result<Vec<Event>> {
    load_category(data_dir, &EVENTS, |record, date| {
        let ends_at = dated(&EVENTS, date)?;
        let roles = split_roles(&strip_parentheticals(record.require("role")?));
        Ok(Event {
            record,
            ends_at,
            roles,
        })
    })
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Role on a grant, judged from its award holders.
///
/// More than one holder (a comma or the word "and") makes the person a
/// co-investigator.
pub fn grant_role(award_holders: &str) -> ProjectRole {
    let holders = award_holders.to_lowercase();
    if holders.contains(',') || holders.contains(" and ") {
        ProjectRole::CoInvestigator
    } else {
        ProjectRole::PrincipalInvestigator
    }
}

fn project(
    mut record: Record,
    ends_at: NaiveDateTime,
    role: ProjectRole,
    source: ProjectSource,
) -> Project {
    record.set("rolename", role.label());
    record.set("roletype", role.rank().to_string());
    Project {
        record,
        ends_at,
        role,
        source,
    }
}

/// Load funded grants, in file order.
pub fn load_grants(data_dir: &Path) -> Result<Vec<Project>> {
    load_category(data_dir, &GRANTS, |mut record, date| {
        let ends_at = dated(&GRANTS, date)?;
        record.update("fundingbody", strip_parentheticals)?;
        let role = grant_role(record.require("awardholders")?);
        Ok(project(record, ends_at, role, ProjectSource::Grant))
    })
}

/// Load project participations, in file order. Always `Researcher`.
pub fn load_participations(data_dir: &Path) -> Result<Vec<Project>> {
    load_category(data_dir, &PARTICIPATIONS, |record, date| {
        let ends_at = dated(&PARTICIPATIONS, date)?;
        Ok(project(
            record,
            ends_at,
            ProjectRole::Researcher,
            ProjectSource::Participation,
        ))
    })
}

// ---------------------------------------------------------------------------
// Teaching
// ---------------------------------------------------------------------------

/// Lecturer and teaching-assistant flags from a role code.
///
/// Plain substring tests on the lowercased code: any `l` marks a lecturer,
/// any `ta` a teaching assistant. Both can hold at once.
pub fn teaching_flags(role: &str) -> (bool, bool) {
    let role = role.to_lowercase();
    (role.contains('l'), role.contains("ta"))
}

/// Load teaching entries, in file order.
pub fn load_teaching(data_dir: &Path) -> Result<Vec<TeachingEntry>> {
    load_category(data_dir, &TEACHING, |mut record, _| {
        let (is_lecturer, is_teaching_assistant) = teaching_flags(record.require("role")?);
        if is_lecturer {
            record.set("islecturer", "true");
        }
        if is_teaching_assistant {
            record.set("isteachingassistant", "true");
        }
        Ok(TeachingEntry {
            record,
            is_lecturer,
            is_teaching_assistant,
        })
    })
}

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

/// Load one publication file, in file order.
pub fn load_publications(data_dir: &Path, source: &PublicationSource) -> Result<Vec<Publication>> {
    load_category(data_dir, &source.spec, |mut record, _| {
        let year = record.require("yearofpublication")?.to_string();
        record.set("type", source.kind.code().to_string());
        Ok(Publication {
            record,
            kind: source.kind,
            year,
        })
    })
}

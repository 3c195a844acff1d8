use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FiltersError, Result};
use crate::form::{FormHost, FormSpec, FormValues};
use crate::model::{FilterRecord, FilterSubmission};
use crate::store::ConfigStore;

/// How a submission merges back into the filter list. Decided once at
/// resolution time and carried unchanged into the upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertMode {
    /// Overwrite the record at this position.
    UpdateAt(usize),
    /// Append as a new record, renaming on a name collision.
    InsertNew,
}

/// Opens the filter editor: resolves the working record (existing, copy, or
/// new template), presents the form, and on submission normalizes the values
/// and merges them into the stored list. Dismissal mutates nothing.
pub fn run<S: ConfigStore, H: FormHost>(
    store: &mut S,
    host: &mut H,
    name: Option<&str>,
    copy: bool,
) -> Result<CmdResult> {
    let mut config = store.load()?;

    let (working, mode) = resolve_source(&config.object_filters, name, copy)?;

    let form = filter_form(&working, mode);
    let submitted = match host.present(&form)? {
        Some(values) => values,
        None => return Ok(CmdResult::default()),
    };

    let record = submission_from(&submitted).normalize();
    let saved = upsert(&mut config.object_filters, mode, record);

    store.save(&config)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Filter saved: {}", saved.name)));
    result.affected_filters.push(saved);
    Ok(result)
}

/// Resolves the record that seeds the form and the mode the submission will
/// merge back under.
fn resolve_source(
    filters: &[FilterRecord],
    name: Option<&str>,
    copy: bool,
) -> Result<(FilterRecord, UpsertMode)> {
    let Some(name) = name else {
        return Ok((FilterRecord::template(filters.len()), UpsertMode::InsertNew));
    };

    let position = filters
        .iter()
        .position(|filter| filter.name == name)
        .ok_or_else(|| FiltersError::FilterNotFound(name.to_string()))?;

    if copy {
        Ok((
            FilterRecord::copy_of(&filters[position]),
            UpsertMode::InsertNew,
        ))
    } else {
        Ok((filters[position].clone(), UpsertMode::UpdateAt(position)))
    }
}

/// Declares the edit form, seeded with the working record's values.
fn filter_form(filter: &FilterRecord, mode: UpsertMode) -> FormSpec {
    let title = match mode {
        UpsertMode::UpdateAt(_) => format!("Filter: {}", filter.name),
        UpsertMode::InsertNew => "Filter: New".to_string(),
    };

    FormSpec::new(title)
        .text(
            "name",
            "Filter name",
            "The filter name should be unique.",
            &filter.name,
        )
        .text(
            "library",
            "Library",
            "Library name. Cannot be a generic name with an asterisk.",
            &filter.library,
        )
        .text(
            "object",
            "Object",
            "Object name. Can be a generic name with an asterisk, e.g. * or Q*.",
            &filter.object,
        )
        .text(
            "types",
            "Object type filter",
            "Comma-delimited list of object types, e.g. *ALL or *PGM, *SRVPGM. *SRCPF returns only source files.",
            &filter.types.join(", "),
        )
        .text(
            "member",
            "Member",
            "Member name. Can be a multi-generic value, e.g. *CL or CL*ABC*. A single * returns all members.",
            &filter.member,
        )
        .text(
            "memberType",
            "Member type",
            "Member type. Can be a multi-generic value, e.g. RPG* or SQL*LE. A single * returns all member types.",
            &filter.member_type,
        )
        .checkbox(
            "protected",
            "Protected",
            "Prevent modifications and source member saves through this filter.",
            filter.protected,
        )
        .submit("Save settings")
}

fn submission_from(values: &FormValues) -> FilterSubmission {
    FilterSubmission {
        name: values.text("name"),
        library: values.text("library"),
        object: values.text("object"),
        types: values.text("types"),
        member: values.text("member"),
        member_type: values.text("memberType"),
        protected: values.flag("protected"),
    }
}

/// Merges the normalized record into the list and returns what was stored.
fn upsert(
    filters: &mut Vec<FilterRecord>,
    mode: UpsertMode,
    mut record: FilterRecord,
) -> FilterRecord {
    match mode {
        UpsertMode::UpdateAt(position) => filters[position] = record.clone(),
        UpsertMode::InsertNew => {
            // One rename only; a colliding "<name> (2)" is left as-is.
            if filters.iter().any(|filter| filter.name == record.name) {
                record.name = format!("{} (2)", record.name);
            }
            filters.push(record.clone());
        }
    }
    record
}

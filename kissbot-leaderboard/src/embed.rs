//! Leaderboard embed fields: one inline field per record, named after the
//! categories the record holds.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{Category, CategoryRecord, DisplayContext, Record, StringFormat};
use crate::format::{if_empty_zero_width_space, limits, truncate_with_ellipsis};
use crate::tree::{build_tree, collapse_and_format};

/// Rendered for categories nobody holds
pub const NO_RECORD: &str = "none";

/// One embed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Render each record as an inline field
///
/// The field name lists the record's categories, collapsed against
/// `supported`. With `category_specific` set, the record renders only the
/// scores relevant to the categories it holds.
pub fn embed_records<R: Record>(
    records: &[CategoryRecord<R>],
    supported: &[Category],
    category_specific: bool,
) -> Vec<EmbedField> {
    let reference = build_tree(supported);
    records
        .iter()
        .map(|cr| {
            let name = if_empty_zero_width_space(collapse_and_format(&cr.categories, &reference));
            let value = match &cr.record {
                Some(record) => {
                    let context = DisplayContext::new(
                        StringFormat::Discord,
                        category_specific.then(|| cr.categories.clone()),
                    );
                    record.to_display_string(&context)
                }
                None => NO_RECORD.to_string(),
            };
            EmbedField::new(
                truncate_with_ellipsis(&name, limits::FIELD_NAME),
                truncate_with_ellipsis(&value, limits::FIELD_VALUE),
                true,
            )
        })
        .collect()
}

/// Sort records for display, then render them category-specifically
pub fn embed_category_records<R: Record>(
    mut records: Vec<CategoryRecord<R>>,
    supported: &[Category],
) -> Vec<EmbedField> {
    sort_category_records(&mut records);
    embed_records(&records, supported, true)
}

/// Sort each record's categories, then records by their first category
///
/// Records holding no category sort last; ties keep their input order.
pub fn sort_category_records<R>(records: &mut [CategoryRecord<R>]) {
    for record in records.iter_mut() {
        record.sort_categories();
    }
    records.sort_by(|a, b| compare_first_category(a.first_category(), b.first_category()));
}

fn compare_first_category(a: Option<&Category>, b: Option<&Category>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

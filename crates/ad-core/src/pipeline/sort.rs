//! Column sorting for the filtered view

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::AlumniRecord;

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Batch,
    State,
    Organization,
    Designation,
    Mobile,
    Support,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Name,
        SortKey::Batch,
        SortKey::State,
        SortKey::Organization,
        SortKey::Designation,
        SortKey::Mobile,
        SortKey::Support,
    ];

    /// Header label for the column
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Batch => "Batch",
            SortKey::State => "State",
            SortKey::Organization => "Organization",
            SortKey::Designation => "Designation",
            SortKey::Mobile => "Mobile",
            SortKey::Support => "Support",
        }
    }

    /// Parse a column identifier such as `"organization"`
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(column))
    }

    fn text<'a>(&self, record: &'a AlumniRecord) -> &'a str {
        match self {
            SortKey::Name => &record.name,
            SortKey::Batch => &record.batch,
            SortKey::State => &record.state,
            SortKey::Organization => record.org_name.as_deref().unwrap_or(""),
            SortKey::Designation => record.designation.as_deref().unwrap_or(""),
            SortKey::Mobile => record.mobile.as_ref().map(|m| m.as_str()).unwrap_or(""),
            SortKey::Support => record.support_status.as_str(),
        }
    }
}

/// Reorder `view` (indices into `records`) ascending by `key`.
///
/// The sort is stable, so records with equal keys keep their relative order.
/// Mobile numbers compare on their numeric value and anything that does not
/// start with a number goes last.
pub fn sort_records(records: &[AlumniRecord], view: &mut [usize], key: SortKey) {
    match key {
        SortKey::Mobile => view.sort_by(|&a, &b| {
            let a = records[a].mobile.as_ref().and_then(|m| m.numeric_value());
            let b = records[b].mobile.as_ref().and_then(|m| m.numeric_value());
            compare_numeric(a, b)
        }),
        _ => view.sort_by(|&a, &b| locale_compare(key.text(&records[a]), key.text(&records[b]))),
    }
}

fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison. On ties lowercase sorts before uppercase,
/// so `a` precedes `A`.
fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        let case_key = |c: char| (c.is_uppercase(), c);
        a.chars().map(case_key).cmp(b.chars().map(case_key))
    })
}

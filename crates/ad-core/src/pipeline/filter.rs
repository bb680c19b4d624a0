//! Search and selector filtering

use crate::model::{AlumniRecord, SupportStatus};

/// Current search term and selector values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively
    pub search_term: String,

    /// Exact batch label
    pub batch: Option<String>,

    /// Exact state name
    pub state: Option<String>,

    /// Exact support status
    pub support: Option<SupportStatus>,
}

impl FilterState {
    /// Whether no predicate is active
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.batch.is_none() && self.state.is_none() && self.support.is_none()
    }

    /// Whether a record passes every active predicate
    pub fn matches(&self, record: &AlumniRecord) -> bool {
        self.matches_search(record)
            && self.batch.as_ref().map_or(true, |b| record.batch == *b)
            && self.state.as_ref().map_or(true, |s| record.state == *s)
            && self.support.map_or(true, |s| record.support_status == s)
    }

    fn matches_search(&self, record: &AlumniRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let needle = self.search_term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&record.name)
            || record.designation.as_deref().map_or(false, contains)
            || record.org_name.as_deref().map_or(false, contains)
            || record.mobile.as_ref().map_or(false, |m| contains(m.as_str()))
    }
}

/// Indices of the records that pass `state`, in source order
pub fn filter_records(records: &[AlumniRecord], state: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| state.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MobileNumber;

    fn sample() -> Vec<AlumniRecord> {
        vec![
            AlumniRecord {
                name: "Asha Rao".into(),
                batch: "B-1".into(),
                state: "TX".into(),
                org_name: Some("Acme Corp".into()),
                designation: Some("Engineer".into()),
                mobile: Some(MobileNumber::new("9876543210")),
                support_status: SupportStatus::Yes,
                linkedin: None,
            },
            AlumniRecord {
                name: "Vikram Singh".into(),
                batch: "B-13".into(),
                state: "CA".into(),
                org_name: None,
                designation: Some("Product Manager".into()),
                mobile: None,
                support_status: SupportStatus::No,
                linkedin: None,
            },
            AlumniRecord {
                name: "Meera Iyer".into(),
                batch: "B-1".into(),
                state: "CA".into(),
                org_name: Some("Globex".into()),
                designation: None,
                mobile: Some(MobileNumber::new("+91-9000000001")),
                support_status: SupportStatus::Unknown,
                linkedin: None,
            },
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        let state = FilterState::default();
        assert!(state.is_empty());
        assert_eq!(filter_records(&records, &state), vec![0, 1, 2]);
        assert!(filter_records(&[], &state).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample();

        let by_name = FilterState { search_term: "VIKRAM".into(), ..Default::default() };
        assert_eq!(filter_records(&records, &by_name), vec![1]);

        let by_org = FilterState { search_term: "globex".into(), ..Default::default() };
        assert_eq!(filter_records(&records, &by_org), vec![2]);

        let by_designation = FilterState { search_term: "engineer".into(), ..Default::default() };
        assert_eq!(filter_records(&records, &by_designation), vec![0]);

        let by_mobile = FilterState { search_term: "98765".into(), ..Default::default() };
        assert_eq!(filter_records(&records, &by_mobile), vec![0]);
    }

    #[test]
    fn test_missing_fields_never_match_search() {
        let records = sample();
        // Record 1 has no organisation and no mobile
        let state = FilterState { search_term: "acme".into(), ..Default::default() };
        assert_eq!(filter_records(&records, &state), vec![0]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let records = sample();
        let state = FilterState {
            search_term: String::new(),
            batch: Some("B-1".into()),
            state: Some("CA".into()),
            support: None,
        };
        assert_eq!(filter_records(&records, &state), vec![2]);

        let state = FilterState {
            batch: Some("B-1".into()),
            support: Some(SupportStatus::No),
            ..Default::default()
        };
        assert!(filter_records(&records, &state).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let state = FilterState {
            search_term: "a".into(),
            state: Some("CA".into()),
            ..Default::default()
        };

        let once: Vec<AlumniRecord> = filter_records(&records, &state)
            .into_iter()
            .map(|idx| records[idx].clone())
            .collect();
        let twice: Vec<AlumniRecord> = filter_records(&once, &state)
            .into_iter()
            .map(|idx| once[idx].clone())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_without_matches() {
        let records = sample();
        let state = FilterState { search_term: "xyz".into(), ..Default::default() };
        assert!(filter_records(&records, &state).is_empty());
    }
}

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::domain::{ButtoningPolicy, TuckingPolicy};
use super::enrichment::EnrichmentSummary;

/// Tally of slots resolved to one policy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyTally {
    pub policy: &'static str,
    pub slots: usize,
}

/// Rendered outcome of an enrichment pass, serializable for API responses
/// and printable from the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentReport {
    pub generated_on: NaiveDate,
    pub templates: usize,
    pub slots: usize,
    pub tucking: Vec<PolicyTally>,
    pub buttoning: Vec<PolicyTally>,
}

impl EnrichmentReport {
    pub fn from_summary(summary: EnrichmentSummary) -> Self {
        Self::with_date(summary, Local::now().date_naive())
    }

    pub fn with_date(summary: EnrichmentSummary, generated_on: NaiveDate) -> Self {
        let tucking = vec![
            PolicyTally {
                policy: TuckingPolicy::Always.label(),
                slots: summary.tucked_always,
            },
            PolicyTally {
                policy: TuckingPolicy::Never.label(),
                slots: summary.tucked_never,
            },
            PolicyTally {
                policy: TuckingPolicy::Optional.label(),
                slots: summary.tucked_optional,
            },
        ];
        let buttoning = vec![
            PolicyTally {
                policy: ButtoningPolicy::NotApplicable.label(),
                slots: summary.buttoning_not_applicable,
            },
            PolicyTally {
                policy: ButtoningPolicy::AlwaysOneUndone.label(),
                slots: summary.buttoning_always_one_undone,
            },
            PolicyTally {
                policy: ButtoningPolicy::OneButtonUndone.label(),
                slots: summary.buttoning_one_button_undone,
            },
            PolicyTally {
                policy: ButtoningPolicy::UnbuttonedOverBase.label(),
                slots: summary.buttoning_unbuttoned_over_base,
            },
        ];

        Self {
            generated_on,
            templates: summary.templates,
            slots: summary.slots,
            tucking,
            buttoning,
        }
    }
}

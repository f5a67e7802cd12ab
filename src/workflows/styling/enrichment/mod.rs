//! Pure styling resolvers and the enrichment pass that applies them.
//!
//! `resolve_tucking` and `resolve_buttoning` are the decision core: total,
//! stateless functions over a slot's role, its allowed subcategories, and
//! the template context. `enrich_templates` is the thin driver that walks a
//! collection in insertion order and writes the derived policies back onto
//! each slot.

mod buttoning;
mod tucking;

pub use buttoning::{resolve_buttoning, WARM_WEATHER_MIN_C};
pub use tucking::resolve_tucking;

use serde::{Deserialize, Serialize};

use super::domain::{ButtoningPolicy, LayeringTemplate, TuckingPolicy};

/// Counters describing one enrichment pass, tallied per resolved policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    pub templates: usize,
    pub slots: usize,
    pub tucked_always: usize,
    pub tucked_never: usize,
    pub tucked_optional: usize,
    pub buttoning_not_applicable: usize,
    pub buttoning_always_one_undone: usize,
    pub buttoning_one_button_undone: usize,
    pub buttoning_unbuttoned_over_base: usize,
}

impl EnrichmentSummary {
    fn record(&mut self, tucking: TuckingPolicy, buttoning: ButtoningPolicy) {
        self.slots += 1;
        match tucking {
            TuckingPolicy::Always => self.tucked_always += 1,
            TuckingPolicy::Never => self.tucked_never += 1,
            TuckingPolicy::Optional => self.tucked_optional += 1,
        }
        match buttoning {
            ButtoningPolicy::NotApplicable => self.buttoning_not_applicable += 1,
            ButtoningPolicy::AlwaysOneUndone => self.buttoning_always_one_undone += 1,
            ButtoningPolicy::OneButtonUndone => self.buttoning_one_button_undone += 1,
            ButtoningPolicy::UnbuttonedOverBase => self.buttoning_unbuttoned_over_base += 1,
        }
    }
}

/// Derive and attach tucking and buttoning policies for every slot of every
/// template, in insertion order. Templates and slots are never reordered,
/// added, or removed; prior enriched values are ignored, so re-running the
/// pass is idempotent.
pub fn enrich_templates(templates: &mut [LayeringTemplate]) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary::default();

    for template in templates.iter_mut() {
        summary.templates += 1;
        let layer_count = template.layer_count;
        let temp_range = template.temp_range();

        for slot in &mut template.slots {
            let tucking =
                resolve_tucking(&slot.slot_name, &slot.allowed_subcategories, layer_count);
            let buttoning = resolve_buttoning(
                &slot.slot_name,
                &slot.allowed_subcategories,
                temp_range.as_ref(),
            );

            slot.tucked_in = Some(tucking);
            slot.buttoning = Some(buttoning);
            summary.record(tucking, buttoning);
        }
    }

    summary
}

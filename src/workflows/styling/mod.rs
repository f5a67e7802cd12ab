//! Outfit layering template styling workflow.
//!
//! Stored outfit templates describe garment slots by role and allowed
//! subcategories; this workflow derives how each slot should be tucked and
//! buttoned, writes the policies back onto the slots, and reports tallies
//! for the pass.

pub mod domain;
pub mod enrichment;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ButtoningPolicy, GarmentTag, LayerSlot, LayeringTemplate, SlotRole, TemperatureRange,
    TuckingPolicy,
};
pub use enrichment::{
    enrich_templates, resolve_buttoning, resolve_tucking, EnrichmentSummary, WARM_WEATHER_MIN_C,
};
pub use report::{EnrichmentReport, PolicyTally};
pub use repository::{JsonTemplateStore, TemplateStore, TemplateStoreError};
pub use router::styling_router;
pub use service::{StylingServiceError, TemplateStylingService};

use std::sync::Arc;

use tracing::info;

use super::enrichment::enrich_templates;
use super::report::EnrichmentReport;
use super::repository::{TemplateStore, TemplateStoreError};

/// Service composing the template store and the enrichment pass.
pub struct TemplateStylingService<S> {
    store: Arc<S>,
}

impl<S> TemplateStylingService<S>
where
    S: TemplateStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Load the collection, derive styling policies for every slot, and
    /// persist the enriched result back to the store.
    pub fn enrich_all(&self) -> Result<EnrichmentReport, StylingServiceError> {
        let mut templates = self.store.load()?;
        let summary = enrich_templates(&mut templates);
        self.store.save(&templates)?;

        info!(
            templates = summary.templates,
            slots = summary.slots,
            "layering templates enriched"
        );
        Ok(EnrichmentReport::from_summary(summary))
    }

    /// Run the pass without writing back, so operators can inspect the
    /// report before committing a collection rewrite.
    pub fn preview(&self) -> Result<EnrichmentReport, StylingServiceError> {
        let mut templates = self.store.load()?;
        let summary = enrich_templates(&mut templates);
        Ok(EnrichmentReport::from_summary(summary))
    }
}

/// Error raised by the styling service.
#[derive(Debug, thiserror::Error)]
pub enum StylingServiceError {
    #[error(transparent)]
    Store(#[from] TemplateStoreError),
}

//! Catalog summary counts

/// Availability counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

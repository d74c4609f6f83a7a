//! Business logic services

pub mod catalog;
pub mod loans;
pub mod stats;

/// Container for all services
#[derive(Debug, Clone, Copy, Default)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub stats: stats::StatsService,
}

impl Services {
    pub fn new() -> Self {
        Self {
            catalog: catalog::CatalogService::new(),
            loans: loans::LoansService::new(),
            stats: stats::StatsService::new(),
        }
    }
}

// Application layer - Use cases over the stats repository
pub mod chart_service;
pub mod franchise_service;
pub mod stats_repository;

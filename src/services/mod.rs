pub mod query_service;
pub mod seed_service;
pub mod statistics_service;

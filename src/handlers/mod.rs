pub mod seed;
pub mod statistics;
pub mod table;
pub mod transactions;

pub mod audit;
pub mod record;

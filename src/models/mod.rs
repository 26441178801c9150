pub mod filter;
pub mod job;

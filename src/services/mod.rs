pub mod board;
pub mod confirm;
pub mod filter;
pub mod form;
pub mod storage;

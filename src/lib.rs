//! Job board
//!
//! A job listing manager: add, edit, delete, search, and filter job postings
//! kept as one JSON snapshot in a key-value store, served as a small
//! server-rendered web board.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

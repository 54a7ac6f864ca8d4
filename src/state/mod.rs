/// State management module
///
/// This module handles all application state, including:
/// - Database connections and queries (library.rs)
/// - Shared data structures (data.rs)
/// - Error types surfaced to the user (error.rs)
/// - Form fields and the table-view cache (form.rs)

pub mod data;
pub mod error;
pub mod form;
pub mod library;

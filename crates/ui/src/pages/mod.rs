//! Page Components for Bookshelf
//!
//! ## Available Pages
//!
//! - **CatalogPage**: the host page; one collection at a time as a column
//!   table, with its add, edit, delete and filter actions

pub mod catalog;

pub use catalog::CatalogPage;

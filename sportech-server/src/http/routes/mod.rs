//! Route handlers organized by resource

pub mod catalog;
pub mod health;

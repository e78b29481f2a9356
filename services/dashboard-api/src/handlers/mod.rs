//! HTTP request handlers for the dashboard API.

pub mod common;
pub mod controls;
pub mod figures;
pub mod health;
pub mod layout;
pub mod table;

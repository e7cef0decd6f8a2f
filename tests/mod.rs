//! Test suite for Catalog Admin
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;

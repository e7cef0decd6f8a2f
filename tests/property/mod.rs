//! Property-based tests

mod filter_proptest;

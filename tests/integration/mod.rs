//! Integration tests module
//!
//! This module contains all integration tests for the StudyBuddy bot,
//! organized by functionality and test scenarios.

pub mod scenarios;

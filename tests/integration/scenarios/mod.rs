//! Integration test scenarios
//!
//! Complete conversations driven through the engine, checking both replies
//! and the resulting session and store contents.

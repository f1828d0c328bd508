//! Integration tests for the IBAX RPC client.

pub mod console_tests;
pub mod dispatch_tests;
pub mod mock;

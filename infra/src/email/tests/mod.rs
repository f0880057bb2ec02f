//! Unit tests for email module

mod adapter_tests;
mod create_service_tests;
mod email_service_tests;
mod http_email_tests;
mod mock_email_tests;

//! Unit tests for the account-recovery service

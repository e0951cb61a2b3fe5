//! Test-only setup shared by unit tests.

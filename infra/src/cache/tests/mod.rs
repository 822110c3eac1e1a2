//! Unit tests for cache module

mod file_cache_tests;

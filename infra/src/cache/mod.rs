//! Cache module
//!
//! Key-value stores behind the cache-backed verification store:
//! - [`FileCache`]: one JSON file per key, swept by [`sweep_expired_files`]
//! - [`MemoryCache`]: in-process map
//! - [`RedisClient`]: Redis with retry and native expiry

pub mod file_cache;
pub mod gc;
pub mod memory_cache;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use file_cache::FileCache;
pub use gc::sweep_expired_files;
pub use memory_cache::MemoryCache;
pub use redis_client::RedisClient;

pub use sc_shared::CacheConfig;

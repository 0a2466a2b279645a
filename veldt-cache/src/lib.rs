//! Time-expiring inventory cache.
//!
//! This crate shields the region simulation from redundant remote inventory
//! calls. It never talks to the backing inventory service itself: callers
//! fetch authoritative data, populate the cache, and subsequent lookups are
//! served from memory until the entry's TTL elapses.
//!
//! # Design Philosophy
//!
//! Expiry is passive: an expired entry reads as a cache miss, and no
//! background sweep is required for correctness. "Not cached" is a routine
//! outcome, never an error, so every lookup returns an `Option` and callers
//! fall back to the backing service on `None`.
//!
//! # Example
//!
//! ```ignore
//! let cache = InventoryCache::with_defaults();
//!
//! // Caller fetched the root folder from the inventory service.
//! cache.cache_root(user_id, root_folder);
//!
//! // Later lookups skip the remote call until the TTL elapses.
//! if let Some(root) = cache.root_folder(user_id) {
//!     send_to_viewer(root);
//! }
//! ```

pub mod expiring;
pub mod inventory;

pub use expiring::ExpiringCache;
pub use inventory::InventoryCache;

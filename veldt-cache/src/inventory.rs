//! Inventory cache facets and snapshot derivations.
//!
//! Three independent facets, each keyed by user and each with its own TTL:
//! root folders, per-kind system folder maps, and full inventory snapshots.
//! Folder-content queries are pure derivations over the cached snapshot -
//! they create no new cache entries and never alias stored collections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use veldt_core::{
    CacheTunables, FolderId, FolderKind, InventoryFolder, InventoryItem, InventorySnapshot, UserId,
};

use crate::expiring::ExpiringCache;

/// Per-user map of system folders, shared by every thread resolving
/// folders for that user. Mutations are serialized by the mutex; the outer
/// store's `add` guarantees racing creators converge on one instance.
type SharedFolderMap = Arc<Mutex<HashMap<FolderKind, InventoryFolder>>>;

/// Multi-level, time-expiring cache over one user's inventory data.
///
/// The cache never fetches from the backing inventory service. Callers
/// fetch authoritative data first and then populate the facet; lookups
/// return `None` once the entry's TTL elapses, and callers treat that as
/// "go fetch again".
///
/// Overwrite policies differ by facet: roots and snapshots are
/// last-writer-wins, system folders are first-writer-wins per
/// (user, kind) - the first system folder found is canonical.
#[derive(Debug)]
pub struct InventoryCache {
    tunables: CacheTunables,
    root_folders: ExpiringCache<UserId, InventoryFolder>,
    system_folders: ExpiringCache<UserId, SharedFolderMap>,
    snapshots: ExpiringCache<UserId, Arc<InventorySnapshot>>,
}

impl Default for InventoryCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// A poisoned lock still guards internally consistent data (every critical
/// section is a single map mutation), so recover the inner value.
fn lock_folders(map: &SharedFolderMap) -> MutexGuard<'_, HashMap<FolderKind, InventoryFolder>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InventoryCache {
    /// Create a cache with the given TTL tunables.
    pub fn new(tunables: CacheTunables) -> Self {
        Self {
            tunables,
            root_folders: ExpiringCache::new(),
            system_folders: ExpiringCache::new(),
            snapshots: ExpiringCache::new(),
        }
    }

    /// Create a cache with default TTLs (1 h folders, 120 s snapshots).
    pub fn with_defaults() -> Self {
        Self::new(CacheTunables::default())
    }

    /// Get the TTL tunables this cache was built with.
    pub fn tunables(&self) -> &CacheTunables {
        &self.tunables
    }

    // ========================================================================
    // ROOT FOLDER FACET
    // ========================================================================

    /// Cache the root folder for a user, replacing any previous entry.
    pub fn cache_root(&self, user_id: UserId, root: InventoryFolder) {
        tracing::debug!(%user_id, folder_id = %root.folder_id, "caching root folder");
        self.root_folders
            .set(user_id, root, self.tunables.root_folder_ttl);
    }

    /// Get the cached root folder for a user.
    pub fn root_folder(&self, user_id: UserId) -> Option<InventoryFolder> {
        self.root_folders.try_get(&user_id)
    }

    // ========================================================================
    // SYSTEM FOLDER FACET
    // ========================================================================

    /// Cache the system folder of the given kind for a user.
    ///
    /// The first folder cached for a (user, kind) pair is canonical; later
    /// registrations for an already-cached kind are silently dropped.
    pub fn cache_system_folder(&self, user_id: UserId, kind: FolderKind, folder: InventoryFolder) {
        let map = self.system_folder_map(user_id);
        let mut folders = lock_folders(&map);
        if folders.contains_key(&kind) {
            tracing::trace!(%user_id, ?kind, "system folder already cached, keeping first");
            return;
        }
        tracing::debug!(%user_id, ?kind, folder_id = %folder.folder_id, "caching system folder");
        folders.insert(kind, folder);
    }

    /// Get the cached system folder of the given kind for a user.
    ///
    /// `None` if the user has no cached map, or the map has no entry for
    /// `kind`.
    pub fn system_folder(&self, user_id: UserId, kind: FolderKind) -> Option<InventoryFolder> {
        let map = self.system_folders.try_get(&user_id)?;
        let folders = lock_folders(&map);
        folders.get(&kind).cloned()
    }

    /// Get the user's shared folder map, installing one if absent.
    ///
    /// Uses the store's insert-if-absent primitive rather than
    /// check-then-set, so two racing creators converge on a single map
    /// instance.
    fn system_folder_map(&self, user_id: UserId) -> SharedFolderMap {
        loop {
            if let Some(map) = self.system_folders.try_get(&user_id) {
                return map;
            }
            let fresh: SharedFolderMap = Arc::new(Mutex::new(HashMap::new()));
            if self.system_folders.add(
                user_id,
                Arc::clone(&fresh),
                self.tunables.system_folder_ttl,
            ) {
                return fresh;
            }
            // Lost the install race; loop to pick up the winner's map.
        }
    }

    // ========================================================================
    // SNAPSHOT FACET
    // ========================================================================

    /// Cache a full inventory snapshot for a user (last-writer-wins).
    ///
    /// Snapshots deliberately carry a much shorter TTL than folders: the
    /// full inventory goes stale far faster than the small set of
    /// well-known system folders.
    pub fn cache_snapshot(&self, user_id: UserId, snapshot: InventorySnapshot) {
        tracing::debug!(
            %user_id,
            folders = snapshot.folders.len(),
            items = snapshot.items.len(),
            "caching inventory snapshot"
        );
        self.snapshots
            .set(user_id, Arc::new(snapshot), self.tunables.snapshot_ttl);
    }

    /// Get the cached inventory snapshot for a user.
    pub fn snapshot(&self, user_id: UserId) -> Option<Arc<InventorySnapshot>> {
        self.snapshots.try_get(&user_id)
    }

    // ========================================================================
    // SNAPSHOT DERIVATIONS
    // ========================================================================

    /// Get the direct contents of a folder from the cached snapshot.
    ///
    /// `None` if no live snapshot is cached for the user. Otherwise a new
    /// collection holding exactly the folders whose parent is `folder_id`
    /// and the items contained in `folder_id` - possibly empty, which is
    /// distinct from absent. The returned collections are copies and cannot
    /// be used to mutate the cached snapshot.
    pub fn folder_content(&self, user_id: UserId, folder_id: FolderId) -> Option<InventorySnapshot> {
        let snapshot = self.snapshots.try_get(&user_id)?;
        let folders = snapshot
            .folders
            .iter()
            .filter(|f| f.parent_id == folder_id)
            .cloned()
            .collect();
        let items = snapshot
            .items
            .iter()
            .filter(|i| i.folder_id == folder_id)
            .cloned()
            .collect();
        Some(InventorySnapshot {
            owner_id: user_id,
            folders,
            items,
        })
    }

    /// Get just the items contained in a folder from the cached snapshot.
    ///
    /// Same absence rule as [`folder_content`]: `None` means no live
    /// snapshot, an empty vec means the folder has no items.
    ///
    /// [`folder_content`]: InventoryCache::folder_content
    pub fn folder_items(&self, user_id: UserId, folder_id: FolderId) -> Option<Vec<InventoryItem>> {
        let snapshot = self.snapshots.try_get(&user_id)?;
        Some(
            snapshot
                .items
                .iter()
                .filter(|i| i.folder_id == folder_id)
                .cloned()
                .collect(),
        )
    }

    // ========================================================================
    // MAINTENANCE
    // ========================================================================

    /// Evict expired entries across all facets, returning how many were
    /// removed. Optional memory hygiene; correctness never depends on it.
    pub fn purge_expired(&self) -> usize {
        self.root_folders.purge_expired()
            + self.system_folders.purge_expired()
            + self.snapshots.purge_expired()
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use veldt_core::new_entity_id;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// folder_content partitions the snapshot exactly: a folder or item
        /// appears in the derived view iff its parent/containing folder is
        /// the queried one.
        #[test]
        fn prop_folder_content_is_exact_partition(
            folder_parents in prop::collection::vec(0..3usize, 0..20),
            item_parents in prop::collection::vec(0..3usize, 0..20),
            query in 0..3usize,
        ) {
            let user_id = new_entity_id();
            let parents: [FolderId; 3] = [new_entity_id(), new_entity_id(), new_entity_id()];

            let folders: Vec<InventoryFolder> = folder_parents
                .iter()
                .map(|&p| InventoryFolder {
                    folder_id: new_entity_id(),
                    parent_id: parents[p],
                    owner_id: user_id,
                    name: "f".to_string(),
                    kind: FolderKind::Object,
                    version: 1,
                })
                .collect();
            let items: Vec<InventoryItem> = item_parents
                .iter()
                .map(|&p| InventoryItem {
                    item_id: new_entity_id(),
                    folder_id: parents[p],
                    owner_id: user_id,
                    name: "i".to_string(),
                    asset_id: new_entity_id(),
                    created_at: chrono::Utc::now(),
                    metadata: None,
                })
                .collect();

            let cache = InventoryCache::with_defaults();
            cache.cache_snapshot(user_id, InventorySnapshot {
                owner_id: user_id,
                folders: folders.clone(),
                items: items.clone(),
            });

            let target = parents[query];
            let content = cache.folder_content(user_id, target).expect("snapshot cached");

            let expected_folders: Vec<_> =
                folders.iter().filter(|f| f.parent_id == target).cloned().collect();
            let expected_items: Vec<_> =
                items.iter().filter(|i| i.folder_id == target).cloned().collect();

            prop_assert_eq!(content.folders, expected_folders);
            prop_assert_eq!(&content.items, &expected_items);

            let only_items = cache.folder_items(user_id, target).expect("snapshot cached");
            prop_assert_eq!(only_items, expected_items);
        }
    }
}

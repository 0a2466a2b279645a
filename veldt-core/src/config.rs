//! Cache tunables.
//!
//! TTLs are explicit, injected configuration rather than process-wide
//! constants, so tests can isolate instances and deployments can tune them.

use std::time::Duration;

use crate::error::{ConfigError, VeldtError, VeldtResult};

/// Per-facet time-to-live configuration for the inventory cache.
///
/// The defaults encode a deliberate 30x disparity: the small set of
/// well-known folders changes far less often than a user's full inventory
/// contents, so snapshots are kept on a much shorter leash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTunables {
    /// TTL for cached root folders.
    pub root_folder_ttl: Duration,
    /// TTL for cached per-kind system folder maps.
    pub system_folder_ttl: Duration,
    /// TTL for cached full-inventory snapshots.
    pub snapshot_ttl: Duration,
}

impl Default for CacheTunables {
    fn default() -> Self {
        Self {
            root_folder_ttl: Duration::from_secs(3600),
            system_folder_ttl: Duration::from_secs(3600),
            snapshot_ttl: Duration::from_secs(120),
        }
    }
}

impl CacheTunables {
    /// Create tunables with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root folder TTL.
    pub fn with_root_folder_ttl(mut self, ttl: Duration) -> Self {
        self.root_folder_ttl = ttl;
        self
    }

    /// Set the system folder TTL.
    pub fn with_system_folder_ttl(mut self, ttl: Duration) -> Self {
        self.system_folder_ttl = ttl;
        self
    }

    /// Set the snapshot TTL.
    pub fn with_snapshot_ttl(mut self, ttl: Duration) -> Self {
        self.snapshot_ttl = ttl;
        self
    }

    /// Validate the configuration.
    ///
    /// A zero TTL would silently disable a facet, which is never what a
    /// deployment wants, so all TTLs must be positive.
    pub fn validate(&self) -> VeldtResult<()> {
        if self.root_folder_ttl.is_zero() {
            return Err(VeldtError::Config(ConfigError::InvalidValue {
                field: "root_folder_ttl".to_string(),
                value: format!("{:?}", self.root_folder_ttl),
                reason: "root_folder_ttl must be positive".to_string(),
            }));
        }

        if self.system_folder_ttl.is_zero() {
            return Err(VeldtError::Config(ConfigError::InvalidValue {
                field: "system_folder_ttl".to_string(),
                value: format!("{:?}", self.system_folder_ttl),
                reason: "system_folder_ttl must be positive".to_string(),
            }));
        }

        if self.snapshot_ttl.is_zero() {
            return Err(VeldtError::Config(ConfigError::InvalidValue {
                field: "snapshot_ttl".to_string(),
                value: format!("{:?}", self.snapshot_ttl),
                reason: "snapshot_ttl must be positive".to_string(),
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tunables_are_valid() {
        let tunables = CacheTunables::default();
        assert!(tunables.validate().is_ok());
        assert_eq!(tunables.root_folder_ttl, Duration::from_secs(3600));
        assert_eq!(tunables.system_folder_ttl, Duration::from_secs(3600));
        assert_eq!(tunables.snapshot_ttl, Duration::from_secs(120));
    }

    #[test]
    fn test_tunables_builder() {
        let tunables = CacheTunables::new()
            .with_root_folder_ttl(Duration::from_secs(600))
            .with_system_folder_ttl(Duration::from_secs(300))
            .with_snapshot_ttl(Duration::from_secs(30));

        assert_eq!(tunables.root_folder_ttl, Duration::from_secs(600));
        assert_eq!(tunables.system_folder_ttl, Duration::from_secs(300));
        assert_eq!(tunables.snapshot_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let tunables = CacheTunables::new().with_snapshot_ttl(Duration::ZERO);
        let result = tunables.validate();
        assert!(matches!(
            result,
            Err(VeldtError::Config(ConfigError::InvalidValue { field, .. })) if field == "snapshot_ttl"
        ));
    }
}

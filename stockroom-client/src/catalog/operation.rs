//! Per-row operation tracking

use std::fmt;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::{ClientError, ClientResult};

/// An in-flight mutation
///
/// Operations on different keys run concurrently; a second operation on a
/// key that is already busy is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKey {
    /// Create or update through the form
    Saving,
    Delete(i64),
    Status(i64),
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saving => f.write_str("saving"),
            Self::Delete(id) => write!(f, "delete-{}", id),
            Self::Status(id) => write!(f, "status-{}", id),
        }
    }
}

/// Set of busy operation keys
#[derive(Debug, Default)]
pub struct Operations {
    active: DashMap<OperationKey, ()>,
}

impl Operations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` busy until the returned guard is dropped
    pub fn begin(&self, key: OperationKey) -> ClientResult<OperationGuard<'_>> {
        match self.active.entry(key) {
            Entry::Occupied(_) => Err(ClientError::Busy(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(OperationGuard { owner: self, key })
            }
        }
    }

    pub fn is_busy(&self, key: OperationKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn active(&self) -> Vec<OperationKey> {
        self.active.iter().map(|entry| *entry.key()).collect()
    }
}

/// Releases its key on drop
#[derive(Debug)]
pub struct OperationGuard<'a> {
    owner: &'a Operations,
    key: OperationKey,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.owner.active.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_is_rejected_until_released() {
        let ops = Operations::new();
        let guard = ops.begin(OperationKey::Delete(3)).unwrap();

        let err = ops.begin(OperationKey::Delete(3)).unwrap_err();
        assert!(matches!(err, ClientError::Busy(ref key) if key == "delete-3"));

        // other rows are unaffected
        let other = ops.begin(OperationKey::Delete(4)).unwrap();
        let status = ops.begin(OperationKey::Status(3)).unwrap();
        assert_eq!(ops.active().len(), 3);

        drop(guard);
        assert!(!ops.is_busy(OperationKey::Delete(3)));
        assert!(ops.begin(OperationKey::Delete(3)).is_ok());
        drop((other, status));
    }
}

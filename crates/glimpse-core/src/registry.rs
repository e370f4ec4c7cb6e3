use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use glimpse_types::{display_name, Subject, View};
use once_cell::sync::Lazy;

/// View-producing logic registered for one type. Receives the live subject
/// (under transparent inheritance, possibly a descendant of the registered
/// type) and assembles its view.
pub type ViewProvider = Arc<dyn for<'a> Fn(&'a dyn Subject) -> View<'a> + Send + Sync>;

/// One registration: the provider plus the leaf flag. The leaf flag
/// attaches to the declaring type's entry only: it controls whether
/// *unmodified descendants* inherit the provider, never the type itself.
#[derive(Clone)]
pub struct CustomViewEntry {
    pub provider: ViewProvider,
    pub leaf: bool,
}

/// Per-type table of view customizations.
///
/// Reads are concurrent; writes are expected during an initialization phase
/// before rendering begins. Re-registration is legal; the last entry for a
/// type wins. Lock poisoning is absorbed: a diagnostic facility has no
/// business propagating another thread's panic.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<TypeId, CustomViewEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` for `T`, overwriting any previous entry.
    pub fn register<T>(
        &self,
        provider: impl for<'a> Fn(&'a dyn Subject) -> View<'a> + Send + Sync + 'static,
        leaf: bool,
    ) where
        T: Subject + ?Sized,
    {
        let entry = CustomViewEntry {
            provider: Arc::new(provider),
            leaf,
        };
        if self.insert(TypeId::of::<T>(), entry).is_some() {
            log::debug!(
                "custom view for {} re-registered; last registration wins",
                display_name(std::any::type_name::<T>())
            );
        }
    }

    /// Keyed registration for hosts that mint type identities dynamically.
    /// Returns the replaced entry, if any.
    pub fn insert(&self, type_id: TypeId, entry: CustomViewEntry) -> Option<CustomViewEntry> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, entry)
    }

    /// O(1) lookup by type identity. Clones the entry out so the read lock
    /// is never held while a provider runs.
    pub fn lookup(&self, type_id: TypeId) -> Option<CustomViewEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::default);

/// The process-wide registry backing the public façade.
pub fn global() -> &'static Registry {
    &GLOBAL
}

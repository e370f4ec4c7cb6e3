use glimpse_types::TypeFacts;

use crate::registry::{Registry, ViewProvider};

/// Which producing logic governs a concrete type. Derived per lookup,
/// never stored or cached. This is a diagnostic path, not a hot one.
pub enum Producer {
    /// A registered provider governs.
    Custom(ViewProvider),
    /// Fall back to structural reflection.
    Structural,
}

/// Decide the governing producer for a subject with concrete type `facts`.
///
/// Walks the nominal ancestor chain starting at the concrete type itself
/// and stops at the first registered level:
///
/// - nothing registered anywhere in the chain: structural reflection;
/// - the concrete type itself is registered: its provider, with the leaf
///   flag irrelevant (a type's own registration is always honored);
/// - a strict ancestor is registered without the leaf flag: that provider,
///   applied to the descendant subject (transparent inheritance);
/// - a strict ancestor is registered as leaf: structural reflection.
///   Unmodified descendants fall back rather than silently inheriting.
pub fn resolve(registry: &Registry, facts: TypeFacts) -> Producer {
    for (hops, level) in facts.ancestry().enumerate() {
        let Some(entry) = registry.lookup(level.id()) else {
            continue;
        };
        if hops == 0 || !entry.leaf {
            return Producer::Custom(entry.provider);
        }
        return Producer::Structural;
    }
    Producer::Structural
}

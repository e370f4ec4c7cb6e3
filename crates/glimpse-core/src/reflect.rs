use glimpse_types::{FieldScan, Subject, View};

use crate::dispatch::{self, Producer};
use crate::registry;

/// Produce the view that governs `subject`: a registered provider if
/// dispatch selects one, structural reflection otherwise. No rendering.
pub fn reflect(subject: &dyn Subject) -> View<'_> {
    match dispatch::resolve(registry::global(), subject.type_facts()) {
        Producer::Custom(provider) => provider(subject),
        Producer::Structural => structural_view(subject),
    }
}

/// Fallback view built purely from the host's field enumeration.
///
/// Children merge the ancestry chain base-first: the root ancestor's
/// declared fields come first, the concrete type's last, in one flat
/// sequence. An ancestor level that cannot be enumerated contributes
/// nothing; if the *concrete* level cannot be enumerated the subject is
/// opaque. This call never fails.
pub fn structural_view(subject: &dyn Subject) -> View<'_> {
    let facts = subject.type_facts();
    let mut levels: Vec<_> = facts.ancestry().collect();
    levels.reverse();

    let mut children = Vec::new();
    for level in &levels {
        match subject.fields(level) {
            FieldScan::Fields(mut found) => children.append(&mut found),
            FieldScan::Opaque if *level == facts => return View::opaque(subject),
            FieldScan::Opaque => {}
        }
    }
    View::new(subject, children, None)
}

use std::any::TypeId;
use std::fmt;

use crate::util::display_name;

/// Nominal identity of a subject's concrete type.
///
/// Rust has no class inheritance, so hierarchy membership is explicit data:
/// a type that conceptually derives from another carries a `parent` link to
/// the ancestor's facts. Value-like types have no parent. The `TypeId` is
/// captured as a function pointer so the constructors stay plain functions.
#[derive(Clone, Copy)]
pub struct TypeFacts {
    name: &'static str,
    id: fn() -> TypeId,
    parent: Option<fn() -> TypeFacts>,
}

impl TypeFacts {
    /// Facts for `T`, named after `std::any::type_name`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>,
            parent: None,
        }
    }

    /// Facts for `T` under an explicit name.
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            id: TypeId::of::<T>,
            parent: None,
        }
    }

    /// Attach the nearest ancestor in the nominal hierarchy.
    pub fn with_parent(mut self, parent: fn() -> TypeFacts) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Full type name as captured at construction time.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, for rendering.
    pub fn display_name(&self) -> String {
        display_name(self.name)
    }

    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    pub fn parent(&self) -> Option<TypeFacts> {
        self.parent.map(|facts| facts())
    }

    /// Walk the hierarchy starting at this type itself, ending at the root.
    pub fn ancestry(&self) -> Ancestry {
        Ancestry { next: Some(*self) }
    }
}

impl PartialEq for TypeFacts {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeFacts {}

impl fmt::Debug for TypeFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeFacts")
            .field("name", &self.name)
            .field("id", &self.id())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Iterator over a type's nominal ancestor chain, self first.
pub struct Ancestry {
    next: Option<TypeFacts>,
}

impl Iterator for Ancestry {
    type Item = TypeFacts;

    fn next(&mut self) -> Option<TypeFacts> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

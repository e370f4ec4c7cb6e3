// Core engine - dispatch resolution, structural reflection, rendering
// This layer sits between the host's Subject implementations (types) and
// whatever diagnostic surface consumes the rendered output.

pub mod dispatch;
pub mod reflect;
pub mod registry;
pub mod render;

pub use dispatch::{resolve, Producer};
pub use reflect::{reflect, structural_view};
pub use registry::{CustomViewEntry, Registry, ViewProvider};
pub use render::{
    render_debug_description, render_debug_description_with, render_outline, render_outline_with,
    RenderOptions, CYCLE_MARKER, TRUNCATION_MARKER,
};

// Re-export the data model so hosts depend on one crate.
pub use glimpse_types::{
    display_name, Ancestry, Child, DisplayStyle, FieldScan, StructuralKind, Subject, SubjectId,
    TypeFacts, View,
};

/// Register a custom view provider for `T` in the process-wide registry.
///
/// Expected to run during an initialization phase, before rendering begins.
/// Re-registering a type is legal; the last registration wins. With
/// `leaf = true`, unmodified descendants of `T` fall back to structural
/// reflection instead of inheriting this provider; `T` itself (and any
/// descendant with its own registration) is unaffected by the flag.
pub fn register_custom_view<T>(
    provider: impl for<'a> Fn(&'a dyn Subject) -> View<'a> + Send + Sync + 'static,
    leaf: bool,
) where
    T: Subject + ?Sized,
{
    registry::global().register::<T>(provider, leaf);
}

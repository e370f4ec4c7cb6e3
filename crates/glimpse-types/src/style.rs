use serde::{Deserialize, Serialize};

/// Rendering template applied to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Bare type name, no structure.
    TypeIdentity,
    /// `TypeName(label: value, ...)`
    Aggregate,
    /// `TypeName(payload)`
    Enumeration,
    /// The wrapped value itself, or nothing.
    Optional,
    /// `(value, value, ...)`
    Tuple,
    /// `[value, value, ...]`
    Collection,
    /// `{value, value, ...}`
    Set,
    /// `[label: value, ...]`
    Map,
}

/// Intrinsic kind of a subject, as reported by the host.
///
/// Kinds describe what the value *is*; `DisplayStyle` describes how a view
/// of it is rendered. The two are bridged by `default_style`, which the
/// structural reflector applies when no style is chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    Aggregate,
    Enumeration,
    Tuple,
    Optional,
    Sequence,
    Set,
    Mapping,
    /// Not decomposable: scalars, foreign values, handles.
    Opaque,
}

impl StructuralKind {
    pub fn default_style(self) -> DisplayStyle {
        match self {
            StructuralKind::Aggregate => DisplayStyle::Aggregate,
            StructuralKind::Enumeration => DisplayStyle::Enumeration,
            StructuralKind::Tuple => DisplayStyle::Tuple,
            StructuralKind::Optional => DisplayStyle::Optional,
            StructuralKind::Sequence => DisplayStyle::Collection,
            StructuralKind::Set => DisplayStyle::Set,
            StructuralKind::Mapping => DisplayStyle::Map,
            StructuralKind::Opaque => DisplayStyle::TypeIdentity,
        }
    }
}

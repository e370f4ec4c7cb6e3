//! `Subject` implementations for common standard-library types.
//!
//! This is the host-side battery: scalars are atoms, containers report
//! their intrinsic kind and enumerate elements, and smart pointers are
//! transparent, delegating everything (identity included) to the pointee.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use crate::facts::TypeFacts;
use crate::style::StructuralKind;
use crate::subject::{FieldScan, Subject, SubjectId};
use crate::view::Child;

macro_rules! atom_subjects {
    ($($ty:ty),* $(,)?) => {$(
        impl Subject for $ty {
            fn type_facts(&self) -> TypeFacts {
                TypeFacts::of::<$ty>()
            }

            fn atom(&self) -> Option<String> {
                Some(self.to_string())
            }
        }
    )*};
}

atom_subjects!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl Subject for char {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<char>()
    }

    fn atom(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

impl Subject for String {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<String>()
    }

    fn atom(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

impl Subject for str {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<str>()
    }

    fn atom(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

impl<T: Subject> Subject for Option<T> {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Optional
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(match self {
            Some(value) => vec![Child::labeled("some", value)],
            None => Vec::new(),
        })
    }
}

impl<T: Subject> Subject for Vec<T> {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Sequence
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(self.iter().map(|item| Child::unlabeled(item)).collect())
    }
}

impl<T: Subject> Subject for [T] {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Sequence
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(self.iter().map(|item| Child::unlabeled(item)).collect())
    }
}

impl<T: Subject, const N: usize> Subject for [T; N] {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Sequence
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(self.iter().map(|item| Child::unlabeled(item)).collect())
    }
}

macro_rules! tuple_subjects {
    ($(($($index:tt $name:ident),+)),+ $(,)?) => {$(
        impl<$($name: Subject),+> Subject for ($($name,)+) {
            fn type_facts(&self) -> TypeFacts {
                TypeFacts::of::<Self>()
            }

            fn structural_kind(&self) -> StructuralKind {
                StructuralKind::Tuple
            }

            fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
                FieldScan::Fields(vec![$(Child::unlabeled(&self.$index)),+])
            }
        }
    )+};
}

tuple_subjects!(
    (0 A, 1 B),
    (0 A, 1 B, 2 C),
    (0 A, 1 B, 2 C, 3 D),
);

/// Maps label each entry with the key's atom when it has one; entries with
/// non-atomic keys fall back to unlabeled values.
macro_rules! map_subjects {
    ($($ty:ident),* $(,)?) => {$(
        impl<K: Subject, V: Subject> Subject for $ty<K, V> {
            fn type_facts(&self) -> TypeFacts {
                TypeFacts::of::<Self>()
            }

            fn structural_kind(&self) -> StructuralKind {
                StructuralKind::Mapping
            }

            fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
                FieldScan::Fields(
                    self.iter()
                        .map(|(key, value)| match key.atom() {
                            Some(label) => Child::labeled(label, value),
                            None => Child::unlabeled(value),
                        })
                        .collect(),
                )
            }
        }
    )*};
}

map_subjects!(BTreeMap, HashMap);

macro_rules! set_subjects {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: Subject> Subject for $ty<T> {
            fn type_facts(&self) -> TypeFacts {
                TypeFacts::of::<Self>()
            }

            fn structural_kind(&self) -> StructuralKind {
                StructuralKind::Set
            }

            fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
                FieldScan::Fields(self.iter().map(|item| Child::unlabeled(item)).collect())
            }
        }
    )*};
}

set_subjects!(BTreeSet, HashSet);

macro_rules! pointer_subjects {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: Subject + ?Sized> Subject for $ty<T> {
            fn type_facts(&self) -> TypeFacts {
                (**self).type_facts()
            }

            fn structural_kind(&self) -> StructuralKind {
                (**self).structural_kind()
            }

            fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
                (**self).fields(level)
            }

            fn atom(&self) -> Option<String> {
                (**self).atom()
            }

            fn identity(&self) -> SubjectId {
                (**self).identity()
            }
        }
    )*};
}

pointer_subjects!(Box, Rc, Arc);

impl<T: Subject + ?Sized> Subject for &'static T {
    fn type_facts(&self) -> TypeFacts {
        (**self).type_facts()
    }

    fn structural_kind(&self) -> StructuralKind {
        (**self).structural_kind()
    }

    fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
        (**self).fields(level)
    }

    fn atom(&self) -> Option<String> {
        (**self).atom()
    }

    fn identity(&self) -> SubjectId {
        (**self).identity()
    }
}

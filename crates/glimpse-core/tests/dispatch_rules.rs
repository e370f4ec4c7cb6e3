//! Hierarchy-propagation rules exercised through the public façade.
//!
//! Each test defines its own subject types so registrations never leak
//! between tests sharing the process-wide registry.

use glimpse_core::{
    reflect, register_custom_view, structural_view, Child, DisplayStyle, FieldScan, StructuralKind,
    Subject, TypeFacts, View,
};
use glimpse_testing::assertions::{assert_labels, assert_style};
use glimpse_testing::fixtures::Coordinate;

#[test]
fn test_unregistered_subject_reflects_structurally() {
    let coordinate = Coordinate { rank: 8, file: 2 };
    let view = reflect(&coordinate);
    let fallback = structural_view(&coordinate);

    assert_style(&view, DisplayStyle::Aggregate).unwrap();
    assert_labels(&view, &["rank", "file"]).unwrap();
    assert_eq!(view.children.len(), fallback.children.len());
    for (reflected, structural) in view.children.iter().zip(&fallback.children) {
        assert_eq!(reflected.label, structural.label);
        assert_eq!(reflected.value.identity(), structural.value.identity());
    }
}

#[test]
fn test_own_registration_beats_leaf_ancestor() {
    struct Base {
        code: u32,
    }
    struct Derived {
        base: Base,
        extra: u32,
    }

    fn base_facts() -> TypeFacts {
        TypeFacts::of::<Base>()
    }

    fn derived_facts() -> TypeFacts {
        TypeFacts::of::<Derived>().with_parent(base_facts)
    }

    impl Subject for Base {
        fn type_facts(&self) -> TypeFacts {
            base_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
            FieldScan::Fields(vec![Child::labeled("code", &self.code)])
        }
    }

    impl Subject for Derived {
        fn type_facts(&self) -> TypeFacts {
            derived_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
            if *level == derived_facts() {
                FieldScan::Fields(vec![Child::labeled("extra", &self.extra)])
            } else {
                self.base.fields(level)
            }
        }
    }

    register_custom_view::<Base>(
        |subject| View::new(subject, Vec::new(), Some(DisplayStyle::Set)),
        true,
    );
    register_custom_view::<Derived>(
        |subject| View::new(subject, Vec::new(), Some(DisplayStyle::Tuple)),
        true,
    );

    let derived = Derived {
        base: Base { code: 1 },
        extra: 2,
    };
    // The concrete type's own registration governs; every leaf flag in the
    // chain is irrelevant to it.
    assert_style(&reflect(&derived), DisplayStyle::Tuple).unwrap();
}

#[test]
fn test_leaf_ancestor_reverts_descendant_to_structural() {
    struct Sealed {
        code: u32,
    }
    struct Unregistered {
        base: Sealed,
        extra: u32,
    }

    fn sealed_facts() -> TypeFacts {
        TypeFacts::of::<Sealed>()
    }

    fn unregistered_facts() -> TypeFacts {
        TypeFacts::of::<Unregistered>().with_parent(sealed_facts)
    }

    impl Subject for Sealed {
        fn type_facts(&self) -> TypeFacts {
            sealed_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
            FieldScan::Fields(vec![Child::labeled("code", &self.code)])
        }
    }

    impl Subject for Unregistered {
        fn type_facts(&self) -> TypeFacts {
            unregistered_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
            if *level == unregistered_facts() {
                FieldScan::Fields(vec![Child::labeled("extra", &self.extra)])
            } else {
                self.base.fields(level)
            }
        }
    }

    register_custom_view::<Sealed>(
        |subject| View::new(subject, Vec::new(), Some(DisplayStyle::Set)),
        true,
    );

    let value = Unregistered {
        base: Sealed { code: 1 },
        extra: 2,
    };
    let view = reflect(&value);
    // Structural reflection, base-first merge, not the ancestor's provider.
    assert_style(&view, DisplayStyle::Aggregate).unwrap();
    assert_labels(&view, &["code", "extra"]).unwrap();
}

#[test]
fn test_transparent_ancestor_governs_descendant() {
    struct Open {
        code: u32,
    }
    struct Heir {
        base: Open,
        extra: u32,
    }

    fn open_facts() -> TypeFacts {
        TypeFacts::of::<Open>()
    }

    fn heir_facts() -> TypeFacts {
        TypeFacts::of::<Heir>().with_parent(open_facts)
    }

    impl Subject for Open {
        fn type_facts(&self) -> TypeFacts {
            open_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
            FieldScan::Fields(vec![Child::labeled("code", &self.code)])
        }
    }

    impl Subject for Heir {
        fn type_facts(&self) -> TypeFacts {
            heir_facts()
        }

        fn structural_kind(&self) -> StructuralKind {
            StructuralKind::Aggregate
        }

        fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
            if *level == heir_facts() {
                FieldScan::Fields(vec![Child::labeled("extra", &self.extra)])
            } else {
                self.base.fields(level)
            }
        }
    }

    // The provider only reads the ancestor level it was declared for, so it
    // works unchanged on any descendant subject it receives.
    register_custom_view::<Open>(
        |subject| {
            let children = match subject.fields(&open_facts()) {
                FieldScan::Fields(children) => children,
                FieldScan::Opaque => Vec::new(),
            };
            View::new(subject, children, Some(DisplayStyle::Set))
        },
        false,
    );

    let heir = Heir {
        base: Open { code: 9 },
        extra: 2,
    };
    let view = reflect(&heir);
    assert_style(&view, DisplayStyle::Set).unwrap();
    assert_labels(&view, &["code"]).unwrap();
    // The view still names the concrete runtime type, not the ancestor that
    // supplied the provider.
    assert_eq!(view.type_name(), "Heir");
}

#[test]
fn test_last_registration_wins_through_facade() {
    struct Flag;

    impl Subject for Flag {
        fn type_facts(&self) -> TypeFacts {
            TypeFacts::of::<Self>()
        }
    }

    register_custom_view::<Flag>(
        |subject| View::new(subject, Vec::new(), Some(DisplayStyle::Set)),
        false,
    );
    register_custom_view::<Flag>(
        |subject| View::new(subject, Vec::new(), Some(DisplayStyle::Tuple)),
        false,
    );

    assert_style(&reflect(&Flag), DisplayStyle::Tuple).unwrap();
}

#[test]
fn test_provider_receives_live_concrete_subject() {
    struct Badge {
        points: u32,
    }

    impl Subject for Badge {
        fn type_facts(&self) -> TypeFacts {
            TypeFacts::of::<Self>()
        }
    }

    register_custom_view::<Badge>(
        |subject| {
            let badge = subject.downcast_ref::<Badge>().expect("registered for Badge");
            assert_eq!(badge.points, 40);
            View::new(subject, Vec::new(), Some(DisplayStyle::TypeIdentity))
        },
        false,
    );

    let badge = Badge { points: 40 };
    assert_style(&reflect(&badge), DisplayStyle::TypeIdentity).unwrap();
}

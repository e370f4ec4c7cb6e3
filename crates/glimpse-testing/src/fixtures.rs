//! Fixture subject types exercised across the workspace tests.
//!
//! Covers the shapes the engine has to handle: a plain value aggregate, a
//! three-level nominal hierarchy built on base-struct composition, an enum,
//! a cyclic graph, a deep single-child chain, and a foreign value that
//! cannot be enumerated.

use std::cell::OnceCell;
use std::rc::Rc;

use glimpse_types::{Child, FieldScan, StructuralKind, Subject, TypeFacts};

/// Plain value aggregate with two labeled fields.
pub struct Coordinate {
    pub rank: u8,
    pub file: u8,
}

impl Subject for Coordinate {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(vec![
            Child::labeled("rank", &self.rank),
            Child::labeled("file", &self.file),
        ])
    }
}

/// Root of the fixture hierarchy.
pub struct Widget {
    pub id: u32,
}

pub fn widget_facts() -> TypeFacts {
    TypeFacts::of::<Widget>()
}

impl Subject for Widget {
    fn type_facts(&self) -> TypeFacts {
        widget_facts()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(vec![Child::labeled("id", &self.id)])
    }
}

/// Middle of the hierarchy; embeds its base and answers ancestor levels by
/// delegating to it.
pub struct Button {
    pub base: Widget,
    pub label: String,
}

pub fn button_facts() -> TypeFacts {
    TypeFacts::of::<Button>().with_parent(widget_facts)
}

impl Subject for Button {
    fn type_facts(&self) -> TypeFacts {
        button_facts()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
        if *level == button_facts() {
            FieldScan::Fields(vec![Child::labeled("label", &self.label)])
        } else {
            self.base.fields(level)
        }
    }
}

/// Leaf-most fixture type, two levels below the root.
pub struct IconButton {
    pub base: Button,
    pub icon: String,
}

pub fn icon_button_facts() -> TypeFacts {
    TypeFacts::of::<IconButton>().with_parent(button_facts)
}

impl Subject for IconButton {
    fn type_facts(&self) -> TypeFacts {
        icon_button_facts()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, level: &TypeFacts) -> FieldScan<'_> {
        if *level == icon_button_facts() {
            FieldScan::Fields(vec![Child::labeled("icon", &self.icon)])
        } else {
            self.base.fields(level)
        }
    }
}

impl IconButton {
    pub fn sample() -> Self {
        Self {
            base: Button {
                base: Widget { id: 7 },
                label: "Go".to_string(),
            },
            icon: "play".to_string(),
        }
    }
}

/// Enum fixture: a unit case and a payload case.
pub enum Verdict {
    Accepted,
    Rejected(String),
}

impl Subject for Verdict {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Enumeration
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        FieldScan::Fields(match self {
            Verdict::Accepted => Vec::new(),
            Verdict::Rejected(reason) => vec![Child::unlabeled(reason)],
        })
    }
}

/// Graph node whose `next` edge can be wired after construction, allowing
/// genuine reference cycles in safe code. Cyclic fixtures leak their `Rc`
/// ring; tests only build a handful.
pub struct Node {
    pub name: &'static str,
    next: OnceCell<Rc<Node>>,
}

impl Node {
    pub fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            next: OnceCell::new(),
        })
    }

    /// Point `from` at `to`; later calls on the same node are ignored.
    pub fn link(from: &Rc<Node>, to: &Rc<Node>) {
        let _ = from.next.set(Rc::clone(to));
    }
}

impl Subject for Node {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        let mut children = vec![Child::labeled("name", &self.name)];
        if let Some(next) = self.next.get() {
            children.push(Child::labeled("next", next));
        }
        FieldScan::Fields(children)
    }
}

/// Single-child chain for depth-limit tests.
pub struct Link {
    pub next: Option<Box<Link>>,
}

impl Subject for Link {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }

    fn structural_kind(&self) -> StructuralKind {
        StructuralKind::Aggregate
    }

    fn fields(&self, _level: &TypeFacts) -> FieldScan<'_> {
        let mut children = Vec::new();
        if let Some(next) = &self.next {
            children.push(Child::labeled("next", next));
        }
        FieldScan::Fields(children)
    }
}

/// Build a chain of `length` links.
pub fn deep_chain(length: usize) -> Link {
    let mut node = Link { next: None };
    for _ in 1..length {
        node = Link {
            next: Some(Box::new(node)),
        };
    }
    node
}

/// Foreign value: no field enumeration, no atom. Renders opaque.
pub struct Foreign {
    pub raw: u64,
}

impl Subject for Foreign {
    fn type_facts(&self) -> TypeFacts {
        TypeFacts::of::<Self>()
    }
}

use std::fmt;

use crate::facts::TypeFacts;
use crate::style::DisplayStyle;
use crate::subject::Subject;

/// One subject's structural description: concrete-type facts, a rendering
/// style, and ordered children.
///
/// Views are transient: built fresh per call, discarded after use, never
/// cached or shared. Children hold live borrows of the nested subjects, so
/// a mutation between construction and rendering is visible; no snapshot
/// isolation is promised.
#[derive(Clone)]
pub struct View<'a> {
    pub facts: TypeFacts,
    pub style: DisplayStyle,
    pub children: Vec<Child<'a>>,
    opaque: bool,
}

impl<'a> View<'a> {
    /// Assemble a view for `subject`. When `style` is omitted it is
    /// inferred from the subject's intrinsic kind.
    ///
    /// The facts always come from the subject itself, so the rendered type
    /// name is the concrete runtime type no matter which ancestor's
    /// provider assembled the view.
    pub fn new(
        subject: &dyn Subject,
        children: Vec<Child<'a>>,
        style: Option<DisplayStyle>,
    ) -> Self {
        Self {
            facts: subject.type_facts(),
            style: style.unwrap_or_else(|| subject.structural_kind().default_style()),
            children,
            opaque: false,
        }
    }

    /// Degraded view for a subject whose fields cannot be enumerated.
    pub fn opaque(subject: &dyn Subject) -> Self {
        Self {
            facts: subject.type_facts(),
            style: DisplayStyle::TypeIdentity,
            children: Vec::new(),
            opaque: true,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Concrete runtime type name, shortened for display.
    pub fn type_name(&self) -> String {
        self.facts.display_name()
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("type", &self.facts.name())
            .field("style", &self.style)
            .field("children", &self.children)
            .field("opaque", &self.opaque)
            .finish()
    }
}

/// A single (optional label, nested value) entry in a view. The value is a
/// borrow of the nested subject, not a copy.
#[derive(Clone)]
pub struct Child<'a> {
    pub label: Option<String>,
    pub value: &'a dyn Subject,
}

impl<'a> Child<'a> {
    pub fn labeled(label: impl Into<String>, value: &'a dyn Subject) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub fn unlabeled(value: &'a dyn Subject) -> Self {
        Self { label: None, value }
    }
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("label", &self.label)
            .field("type", &self.value.type_facts().name())
            .finish()
    }
}

use glimpse_types::{DisplayStyle, Subject, SubjectId, View};
use serde::{Deserialize, Serialize};

use crate::dispatch::{self, Producer};
use crate::reflect::structural_view;
use crate::registry;

/// Emitted when a subject already on the active recursion path is reached
/// again.
pub const CYCLE_MARKER: &str = "<cycle>";

/// Emitted in place of content dropped by a depth or width limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Soft bounds for one render pass. `Default` is unlimited; callers that
/// need bounded latency on unknown graphs set both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Recursion depth at which subjects render as the truncation marker.
    /// The root is depth 0, so `Some(5)` draws five structural levels.
    pub max_depth: Option<usize>,
    /// Children rendered per view before one trailing truncation marker.
    pub max_children: Option<usize>,
}

impl RenderOptions {
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn with_max_children(mut self, limit: usize) -> Self {
        self.max_children = Some(limit);
        self
    }
}

/// Render `subject` as a single-line structural description.
pub fn render_debug_description(subject: &dyn Subject) -> String {
    render_debug_description_with(subject, &RenderOptions::default())
}

/// Render with explicit limits. Never fails: cycles, depth, width, and
/// unenumerable subjects all degrade to inline markers.
pub fn render_debug_description_with(subject: &dyn Subject, options: &RenderOptions) -> String {
    let mut pass = InlinePass {
        options,
        path: Vec::new(),
        out: String::new(),
    };
    pass.subject(subject, 0);
    pass.out
}

/// Render `subject` as a multi-line indented outline.
pub fn render_outline(subject: &dyn Subject) -> String {
    render_outline_with(subject, &RenderOptions::default())
}

/// Outline rendering with explicit limits; same dispatch, cycle, and
/// bounding rules as the single-line form.
pub fn render_outline_with(subject: &dyn Subject, options: &RenderOptions) -> String {
    let mut pass = OutlinePass {
        options,
        path: Vec::new(),
        out: String::new(),
    };
    pass.node(None, subject, 0);
    pass.out
}

/// What one subject renders as, after dispatch.
enum Produced<'a> {
    View(View<'a>),
    /// Structural dispatch landed on a scalar; the atom text replaces any
    /// view. A registered provider always outranks the atom.
    Atom(String),
}

fn produce(subject: &dyn Subject) -> Produced<'_> {
    match dispatch::resolve(registry::global(), subject.type_facts()) {
        Producer::Custom(provider) => Produced::View(provider(subject)),
        Producer::Structural => match subject.atom() {
            Some(text) => Produced::Atom(text),
            None => Produced::View(structural_view(subject)),
        },
    }
}

struct InlinePass<'o> {
    options: &'o RenderOptions,
    path: Vec<SubjectId>,
    out: String,
}

impl InlinePass<'_> {
    fn subject(&mut self, subject: &dyn Subject, depth: usize) {
        // Depth is checked before dispatch so a truncated subtree costs
        // nothing; total work stays O(max_depth * max_children).
        if self.options.max_depth.is_some_and(|limit| depth >= limit) {
            self.out.push_str(TRUNCATION_MARKER);
            return;
        }
        let id = subject.identity();
        if self.path.contains(&id) {
            self.out.push_str(CYCLE_MARKER);
            return;
        }
        match produce(subject) {
            Produced::Atom(atom) => self.out.push_str(&atom),
            Produced::View(view) => {
                self.path.push(id);
                self.view(&view, depth);
                self.path.pop();
            }
        }
    }

    fn view(&mut self, view: &View<'_>, depth: usize) {
        let name = view.type_name();
        match view.style {
            DisplayStyle::TypeIdentity => {
                if view.is_opaque() {
                    self.out.push_str("<opaque ");
                    self.out.push_str(&name);
                    self.out.push('>');
                } else {
                    self.out.push_str(&name);
                }
            }
            DisplayStyle::Aggregate => {
                self.out.push_str(&name);
                self.out.push('(');
                self.children(view, depth, true);
                self.out.push(')');
            }
            DisplayStyle::Enumeration => {
                self.out.push_str(&name);
                if !view.children.is_empty() {
                    self.out.push('(');
                    self.children(view, depth, false);
                    self.out.push(')');
                }
            }
            DisplayStyle::Optional => {
                if let Some(child) = view.children.first() {
                    self.subject(child.value, depth + 1);
                }
            }
            DisplayStyle::Tuple => {
                self.out.push('(');
                self.children(view, depth, true);
                self.out.push(')');
            }
            DisplayStyle::Collection => {
                self.out.push('[');
                self.children(view, depth, false);
                self.out.push(']');
            }
            DisplayStyle::Set => {
                self.out.push('{');
                self.children(view, depth, false);
                self.out.push('}');
            }
            DisplayStyle::Map => {
                self.out.push('[');
                self.children(view, depth, true);
                self.out.push(']');
            }
        }
    }

    fn children(&mut self, view: &View<'_>, depth: usize, with_labels: bool) {
        let limit = self.options.max_children.unwrap_or(usize::MAX);
        for (index, child) in view.children.iter().enumerate() {
            if index > 0 {
                self.out.push_str(", ");
            }
            if index >= limit {
                self.out.push_str(TRUNCATION_MARKER);
                break;
            }
            if with_labels && let Some(label) = &child.label {
                self.out.push_str(label);
                self.out.push_str(": ");
            }
            self.subject(child.value, depth + 1);
        }
    }
}

struct OutlinePass<'o> {
    options: &'o RenderOptions,
    path: Vec<SubjectId>,
    out: String,
}

impl OutlinePass<'_> {
    fn line(&mut self, depth: usize, label: Option<&str>, text: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        if let Some(label) = label {
            self.out.push_str(label);
            self.out.push_str(": ");
        }
        self.out.push_str(text);
    }

    fn node(&mut self, label: Option<&str>, subject: &dyn Subject, depth: usize) {
        if self.options.max_depth.is_some_and(|limit| depth >= limit) {
            self.line(depth, label, TRUNCATION_MARKER);
            return;
        }
        let id = subject.identity();
        if self.path.contains(&id) {
            self.line(depth, label, CYCLE_MARKER);
            return;
        }
        let view = match produce(subject) {
            Produced::Atom(atom) => {
                self.line(depth, label, &atom);
                return;
            }
            Produced::View(view) => view,
        };

        let name = view.type_name();
        if view.is_opaque() {
            self.line(depth, label, &format!("<opaque {name}>"));
            return;
        }
        self.line(depth, label, &name);

        self.path.push(id);
        let limit = self.options.max_children.unwrap_or(usize::MAX);
        for (index, child) in view.children.iter().enumerate() {
            if index >= limit {
                self.line(depth + 1, None, TRUNCATION_MARKER);
                break;
            }
            self.node(child.label.as_deref(), child.value, depth + 1);
        }
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_is_unlimited() {
        let options = RenderOptions::default();
        assert_eq!(options.max_depth, None);
        assert_eq!(options.max_children, None);
    }

    #[test]
    fn test_options_builders() {
        let options = RenderOptions::default()
            .with_max_depth(5)
            .with_max_children(3);
        assert_eq!(options.max_depth, Some(5));
        assert_eq!(options.max_children, Some(3));
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = RenderOptions::default().with_max_depth(2);
        let json = serde_json::to_string(&options).unwrap();
        let back: RenderOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}

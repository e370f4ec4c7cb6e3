//! View and rendering assertions shared by the workspace tests.
//!
//! Each assertion reports what it saw, not just that it failed, so test
//! output reads like a diff.

use anyhow::Result;
use glimpse_core::{render_debug_description, DisplayStyle, Subject, View};

/// Assert a view carries the expected display style.
pub fn assert_style(view: &View<'_>, expected: DisplayStyle) -> Result<()> {
    if view.style != expected {
        anyhow::bail!("expected style {:?}, got {:?}", expected, view.style);
    }
    Ok(())
}

/// Assert a view's labeled children carry exactly `expected`, in order.
pub fn assert_labels(view: &View<'_>, expected: &[&str]) -> Result<()> {
    let labels: Vec<&str> = view
        .children
        .iter()
        .filter_map(|child| child.label.as_deref())
        .collect();
    if labels != expected {
        anyhow::bail!("expected labels {:?}, got {:?}", expected, labels);
    }
    Ok(())
}

/// Assert a view has exactly `expected` children.
pub fn assert_child_count(view: &View<'_>, expected: usize) -> Result<()> {
    if view.children.len() != expected {
        anyhow::bail!(
            "expected {} children, got {} in {:?}",
            expected,
            view.children.len(),
            view
        );
    }
    Ok(())
}

/// Assert the unbounded single-line rendering of `subject`.
pub fn assert_renders(subject: &dyn Subject, expected: &str) -> Result<()> {
    let rendered = render_debug_description(subject);
    if rendered != expected {
        anyhow::bail!("expected {:?}, rendered {:?}", expected, rendered);
    }
    Ok(())
}

//! List-to-HTML section generators.
//!
//! Every generator maps an ordered slice of records to one fragment per
//! record, joined by a fixed separator. Output order is input order, an
//! empty slice renders as the empty string, and anything that singles out an
//! item (the active filter, the animation stagger) is driven by its index.

pub mod cards;
pub mod derive;
pub mod listings;
pub mod nav;
pub mod people;

pub use cards::*;
pub use derive::{DateParts, category_label, date_parts, initials, platform_name, role_label, social_icon};
pub use listings::*;
pub use nav::*;
pub use people::*;

/// Separator between inline links inside a `<nav>` or footer column.
pub(crate) const INLINE_SEP: &str = "\n        ";
/// Separator between social icons.
pub(crate) const ICON_SEP: &str = "\n          ";
/// Separator between `<option>` elements and nested tags.
pub(crate) const OPTION_SEP: &str = "\n            ";
/// Separator between block-level cards.
pub(crate) const BLOCK_SEP: &str = "\n";

/// Renders each item with its position and joins the fragments.
pub(crate) fn join_indexed<T, F>(items: &[T], sep: &str, render: F) -> String
where
    F: Fn(usize, &T) -> String,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| render(i, item))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Renders each item and joins the fragments.
pub(crate) fn join<T, F>(items: &[T], sep: &str, render: F) -> String
where
    F: Fn(&T) -> String,
{
    join_indexed(items, sep, |_, item| render(item))
}

/// Returns `html` when `cond` holds, the empty string otherwise.
pub(crate) fn when(cond: bool, html: impl FnOnce() -> String) -> String {
    if cond { html() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_is_empty() {
        let items: [&str; 0] = [];
        assert_eq!(join(&items, BLOCK_SEP, |s| s.to_string()), "");
    }

    #[test]
    fn test_join_indexed_preserves_order() {
        let out = join_indexed(&["a", "b", "c"], ",", |i, s| format!("{i}{s}"));
        assert_eq!(out, "0a,1b,2c");
    }

    #[test]
    fn test_when() {
        assert_eq!(when(true, || "x".into()), "x");
        assert_eq!(when(false, || "x".into()), "");
    }
}

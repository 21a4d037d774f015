//! Items-wrap template expansion.
//!
//! The items-wrap template determines what markup surrounds the
//! concatenated item list. Slots use positional `printf`-style tokens:
//! `%1$s` is the menu id, `%2$s` the menu class, `%3$s` the items
//! themselves. The default template after
//! [`MenuArgs::with_defaults`](crate::MenuArgs::with_defaults) is
//! `"\n%3$s"`, which emits the raw item list with no surrounding
//! `<ul>`/`<ol>` element.

/// Expand an items-wrap template by replacing its positional slots.
///
/// Literal replacement, no validation: unknown tokens pass through, and a
/// template without `%3$s` simply drops the items.
pub fn expand_items_wrap(template: &str, menu_id: &str, menu_class: &str, items: &str) -> String {
    template
        .replace("%1$s", menu_id)
        .replace("%2$s", menu_class)
        .replace("%3$s", items)
}

//! Menu render configuration and default-argument policy.
//!
//! `MenuArgs` is the one config type shared by both pipeline stages: the
//! host renderer consumes it to build markup, and the normalizer consults
//! it afterward. Defaultable options are `Option` so "not set by the
//! caller" stays distinct from an explicit value.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slug::slugify;

/// Renderer invoked by the host when the requested menu does not exist.
///
/// Cleared by [`MenuArgs::with_defaults`]: callers that need "not found"
/// handling are expected to provide it themselves.
pub type FallbackFn = Arc<dyn Fn(&MenuArgs) -> String + Send + Sync>;

/// The element wrapping the rendered menu items, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    /// No wrapper element at all.
    None,
    /// Wrap the items in the named element, e.g. `"nav"` or `"div"`.
    Element(String),
}

impl Container {
    /// Shorthand for `Container::Element`.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(tag.into())
    }
}

/// Arguments for a single menu render request.
///
/// Created per render call by the host, adjusted by
/// [`with_defaults`](Self::with_defaults), and discarded once the caller
/// consumes the final markup. `None` on a defaultable field means the
/// caller left it unset.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuArgs {
    /// Name of the menu to render; also the source of the default
    /// container class.
    pub menu: String,
    /// Escape hatch: when true, `with_defaults` returns the args untouched.
    pub suppress_defaults: bool,
    /// Fallback renderer for when the menu is not found. Not part of the
    /// serialized config shape.
    #[serde(skip)]
    pub fallback: Option<FallbackFn>,
    /// Template wrapped around the concatenated item markup. Slots:
    /// `%1$s` menu id, `%2$s` menu class, `%3$s` the items themselves.
    pub items_wrap: Option<String>,
    /// Wrapper element around the whole menu.
    pub container: Option<Container>,
    /// Class attribute for the wrapper element.
    pub container_class: Option<String>,
    /// Whether to fuse `<li>` wrappers into their anchors after rendering.
    pub strip_li: Option<bool>,
}

impl MenuArgs {
    /// Args for rendering the named menu, everything else unset.
    pub fn new(menu: impl Into<String>) -> Self {
        Self {
            menu: menu.into(),
            ..Self::default()
        }
    }

    /// Apply the default-argument policy.
    ///
    /// Unless `suppress_defaults` is set, the fallback renderer is cleared
    /// and the items-wrap template is forced to a bare `"\n%3$s"` (no
    /// `<ul>`/`<ol>` around the items). Container, container class, and
    /// `strip_li` are only filled in when the caller left them unset:
    /// a `<nav>` wrapper, a slug of the menu name, and `true` respectively.
    ///
    /// Idempotent: a second application is a no-op, since every defaultable
    /// field is set after the first.
    pub fn with_defaults(mut self) -> Self {
        if self.suppress_defaults {
            debug!(menu = %self.menu, "menu defaults suppressed by caller");
            return self;
        }

        self.fallback = None;
        self.items_wrap = Some("\n%3$s".to_string());

        if self.container.is_none() {
            self.container = Some(Container::element("nav"));
        }

        if self.container_class.is_none() {
            self.container_class = Some(slugify(&self.menu));
        }

        if self.strip_li.is_none() {
            self.strip_li = Some(true);
        }

        self
    }
}

impl fmt::Debug for MenuArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuArgs")
            .field("menu", &self.menu)
            .field("suppress_defaults", &self.suppress_defaults)
            .field("fallback", &self.fallback.as_ref().map(|_| ".."))
            .field("items_wrap", &self.items_wrap)
            .field("container", &self.container)
            .field("container_class", &self.container_class)
            .field("strip_li", &self.strip_li)
            .finish()
    }
}

impl PartialEq for MenuArgs {
    fn eq(&self, other: &Self) -> bool {
        // Closures have no structural equality; compare fallbacks by
        // identity.
        let fallback_eq = match (&self.fallback, &other.fallback) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        fallback_eq
            && self.menu == other.menu
            && self.suppress_defaults == other.suppress_defaults
            && self.items_wrap == other.items_wrap
            && self.container == other.container
            && self.container_class == other.container_class
            && self.strip_li == other.strip_li
    }
}

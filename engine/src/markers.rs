//! Class and attribute names forming the markup contract between a page
//! and the animator.

/// Numeric counter elements.
pub const COUNTER_CLASS: &str = "stat-number";

/// Attribute holding a counter's goal value.
pub const COUNTER_TARGET_ATTR: &str = "data-target";

/// The statistics bar; revealing it animates every counter on the page.
pub const STATS_BAR_CLASS: &str = "stats-bar";

/// Certification cards: staggered reveal plus hover raise.
pub const CERT_CARD_CLASS: &str = "cert-card";

/// Elements opting into the scroll-triggered fade-in.
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";

/// A generated floating decoration.
pub const FLOATING_ELEMENT_CLASS: &str = "floating-element";

/// Where decorations live; absent container means no decorations.
pub const DECORATION_CONTAINER_SELECTOR: &str = ".cert-section .floating-elements";

/// Anchors the scroller intercepts: in-page fragment links only.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Attribute whose value doubles as the scroll target selector.
pub const ANCHOR_HREF_ATTR: &str = "href";

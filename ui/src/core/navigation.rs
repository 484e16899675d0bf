//! Mobile navigation panel and in-page anchor targets.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLayout {
    /// Links laid out in the header bar.
    #[default]
    Inline,
    /// Links hidden behind the menu glyph.
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
    layout: NavLayout,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close after an in-page link was followed. Only applies on narrow
    /// viewports with the panel open; returns whether anything changed.
    pub fn close_for_navigation(&mut self, viewport_width: Option<f64>, breakpoint: f64) -> bool {
        let narrow = viewport_width.is_some_and(|w| w <= breakpoint);
        if narrow && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Re-layout after a window resize. The panel always ends up closed.
    pub fn on_resize(&mut self, viewport_width: f64, breakpoint: f64) -> NavLayout {
        self.layout = if viewport_width > breakpoint {
            NavLayout::Inline
        } else {
            NavLayout::Collapsed
        };
        self.open = false;
        self.layout
    }

    pub fn glyph(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn glyph_class(&self) -> &'static str {
        if self.open {
            "mobile-menu active"
        } else {
            "mobile-menu"
        }
    }

    /// Inline `display` override applied after a resize collapsed the links.
    pub fn panel_style(&self) -> &'static str {
        match (self.layout, self.open) {
            (NavLayout::Inline, _) => "",
            (NavLayout::Collapsed, true) => "display: flex",
            (NavLayout::Collapsed, false) => "display: none",
        }
    }
}

/// `"#features"` → `Some("features")`. Anything that is not a same-page
/// fragment yields `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

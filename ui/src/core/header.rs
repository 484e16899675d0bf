//! Header treatment driven by the vertical scroll offset.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderStyle {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderStyle {
    pub fn background(&self) -> &'static str {
        if self.scrolled {
            "rgba(26, 35, 64, 0.98)"
        } else {
            "rgba(26, 35, 64, 0.95)"
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        if self.scrolled {
            "blur(15px)"
        } else {
            "blur(10px)"
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }

    pub fn inline_css(&self) -> String {
        format!(
            "background: {}; backdrop-filter: {}; transform: {};",
            self.background(),
            self.backdrop_filter(),
            self.transform()
        )
    }
}

/// Remembers the previous offset so direction can be derived per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScroll {
    last_y: f64,
    threshold: f64,
}

impl HeaderScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            last_y: 0.0,
            threshold,
        }
    }

    pub fn on_scroll(&mut self, y: f64) -> HeaderStyle {
        let past_threshold = y > self.threshold;
        let style = HeaderStyle {
            scrolled: past_threshold,
            hidden: past_threshold && y > self.last_y,
        };
        self.last_y = y;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_flips_exactly_past_threshold() {
        let mut header = HeaderScroll::new(100.0);
        assert!(!header.on_scroll(100.0).scrolled);
        assert!(header.on_scroll(100.5).scrolled);
        assert!(!header.on_scroll(99.0).scrolled);
    }

    #[test]
    fn direction_alternates_hide_and_show() {
        let mut header = HeaderScroll::new(100.0);
        assert!(!header.on_scroll(50.0).hidden);
        assert!(header.on_scroll(300.0).hidden);
        assert!(!header.on_scroll(250.0).hidden);
        assert!(header.on_scroll(400.0).hidden);
        // same offset is not "downward"
        assert!(!header.on_scroll(400.0).hidden);
        // below the threshold the header stays visible even scrolling down
        assert!(!header.on_scroll(20.0).hidden);
        assert!(!header.on_scroll(80.0).hidden);
    }

    #[test]
    fn inline_css_carries_all_three_properties() {
        let css = HeaderStyle {
            scrolled: true,
            hidden: true,
        }
        .inline_css();
        assert!(css.contains("rgba(26, 35, 64, 0.98)"));
        assert!(css.contains("blur(15px)"));
        assert!(css.contains("translateY(-100%)"));

        let rest = HeaderStyle::default().inline_css();
        assert!(rest.contains("rgba(26, 35, 64, 0.95)"));
        assert!(rest.contains("blur(10px)"));
        assert!(rest.contains("translateY(0)"));
    }
}

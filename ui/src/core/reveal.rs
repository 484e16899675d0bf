//! Fire-once reveal animation state for elements entering the viewport.

use std::collections::BTreeMap;

/// Transition timing for one group of animated elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    pub duration_s: f64,
    /// Extra delay per position in the group.
    pub stagger_s: f64,
}

impl RevealTiming {
    pub const FEATURE_CARDS: RevealTiming = RevealTiming {
        duration_s: 0.6,
        stagger_s: 0.1,
    };
    pub const ABOUT_BLOCKS: RevealTiming = RevealTiming {
        duration_s: 0.8,
        stagger_s: 0.2,
    };

    pub fn delay_s(&self, index: usize) -> f64 {
        index as f64 * self.stagger_s
    }
}

pub fn reveal_style(index: usize, timing: RevealTiming, revealed: bool) -> String {
    let (opacity, offset) = if revealed {
        ("1", "translateY(0)")
    } else {
        ("0", "translateY(30px)")
    };
    let duration = timing.duration_s;
    let delay = format_seconds(timing.delay_s(index));
    format!(
        "opacity: {opacity}; transform: {offset}; \
         transition: opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s;"
    )
}

// 0.30000000000000004 -> 0.3
fn format_seconds(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

/// Which observed elements have been revealed. Once revealed an element
/// never goes back to hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTracker {
    elements: BTreeMap<String, bool>,
}

impl RevealTracker {
    /// Start tracking `id` in its hidden state. Re-observing keeps prior state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    /// Mark `id` visible. `true` only on the first transition.
    pub fn reveal(&mut self, id: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Reveal every tracked element; used where no observer can watch them.
    pub fn reveal_all(&mut self) -> usize {
        let mut changed = 0;
        for revealed in self.elements.values_mut().filter(|r| !**r) {
            *revealed = true;
            changed += 1;
        }
        changed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once() {
        let mut tracker = RevealTracker::default();
        tracker.observe("card-0");
        assert!(!tracker.is_revealed("card-0"));
        assert!(tracker.reveal("card-0"));
        assert!(!tracker.reveal("card-0"));
        assert!(tracker.is_revealed("card-0"));

        // re-observing does not hide it again
        tracker.observe("card-0");
        assert!(tracker.is_revealed("card-0"));
    }

    #[test]
    fn unknown_ids_are_not_revealed() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.reveal("ghost"));
        assert!(!tracker.is_revealed("ghost"));
    }

    #[test]
    fn reveal_all_reveals_remaining() {
        let mut tracker = RevealTracker::default();
        for id in ["a", "b", "c"] {
            tracker.observe(id);
        }
        tracker.reveal("b");
        assert_eq!(tracker.reveal_all(), 2);
        assert!(["a", "b", "c"].iter().all(|id| tracker.is_revealed(id)));
        assert_eq!(tracker.reveal_all(), 0);
    }

    #[test]
    fn styles_stagger_by_index() {
        let hidden = reveal_style(3, RevealTiming::FEATURE_CARDS, false);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translateY(30px)"));
        assert!(hidden.contains("opacity 0.6s ease 0.3s"));

        let shown = reveal_style(1, RevealTiming::ABOUT_BLOCKS, true);
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("translateY(0)"));
        assert!(shown.contains("transform 0.8s ease 0.2s"));
    }
}

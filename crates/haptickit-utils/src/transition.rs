//! Asymmetric slide transitions
//!
//! A view slides in from one edge and out towards another. The defaults
//! enter from the leading edge and leave through the trailing edge, which
//! reads as forward navigation in left-to-right layouts.

use serde::{Deserialize, Serialize};

/// Side of a container, in left-to-right layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    /// Upper edge.
    Top,
    /// Lower edge.
    Bottom,
    /// Start of the reading direction (left).
    Leading,
    /// End of the reading direction (right).
    Trailing,
}

/// A 2D translation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal component, positive towards the trailing edge.
    pub dx: f64,
    /// Vertical component, positive downwards.
    pub dy: f64,
}

impl Offset {
    /// Offset of `dx` horizontally and `dy` vertically.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Edge {
    /// Unit vector pointing towards this edge. `y` grows downwards.
    #[must_use]
    pub const fn unit(self) -> Offset {
        match self {
            Edge::Top => Offset::new(0.0, -1.0),
            Edge::Bottom => Offset::new(0.0, 1.0),
            Edge::Leading => Offset::new(-1.0, 0.0),
            Edge::Trailing => Offset::new(1.0, 0.0),
        }
    }

    /// Translation that moves content of size `extent` fully past this edge.
    #[must_use]
    pub fn offset(self, extent: Offset) -> Offset {
        let unit = self.unit();
        Offset::new(unit.dx * extent.dx, unit.dy * extent.dy)
    }
}

/// Slide in from `insertion`, slide out towards `removal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideTransition {
    /// Edge inserted content enters from.
    pub insertion: Edge,
    /// Edge removed content leaves through.
    pub removal: Edge,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self {
            insertion: Edge::Leading,
            removal: Edge::Trailing,
        }
    }
}

impl SlideTransition {
    /// Transition entering from `insertion` and leaving towards `removal`.
    ///
    /// ```
    /// use haptickit_utils::{Edge, Offset, SlideTransition};
    ///
    /// let sheet = SlideTransition::new(Edge::Bottom, Edge::Bottom);
    /// let extent = Offset::new(320.0, 640.0);
    /// assert_eq!(sheet.insertion_offset(extent), Offset::new(0.0, 640.0));
    /// assert_eq!(sheet.reversed(), sheet);
    /// ```
    #[must_use]
    pub const fn new(insertion: Edge, removal: Edge) -> Self {
        Self { insertion, removal }
    }

    /// Where inserted content starts before sliding to its resting place.
    #[must_use]
    pub fn insertion_offset(&self, extent: Offset) -> Offset {
        self.insertion.offset(extent)
    }

    /// Where removed content ends up.
    #[must_use]
    pub fn removal_offset(&self, extent: Offset) -> Offset {
        self.removal.offset(extent)
    }

    /// The same transition played backwards.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            insertion: self.removal,
            removal: self.insertion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let transition = SlideTransition::default();
        assert_eq!(transition.insertion, Edge::Leading);
        assert_eq!(transition.removal, Edge::Trailing);
    }

    #[test]
    fn test_offsets_scale_with_extent() {
        let extent = Offset::new(320.0, 640.0);
        let transition = SlideTransition::default();
        assert_eq!(transition.insertion_offset(extent), Offset::new(-320.0, 0.0));
        assert_eq!(transition.removal_offset(extent), Offset::new(320.0, 0.0));
        assert_eq!(Edge::Top.offset(extent), Offset::new(0.0, -640.0));
        assert_eq!(Edge::Bottom.offset(extent), Offset::new(0.0, 640.0));
    }

    #[test]
    fn test_reversed() {
        let transition = SlideTransition::new(Edge::Top, Edge::Bottom).reversed();
        assert_eq!(transition, SlideTransition::new(Edge::Bottom, Edge::Top));
    }

    #[test]
    fn test_partial_serde_uses_defaults() -> Result<(), serde_json::Error> {
        let transition: SlideTransition = serde_json::from_str(r#"{"removal":"bottom"}"#)?;
        assert_eq!(transition, SlideTransition::new(Edge::Leading, Edge::Bottom));
        Ok(())
    }
}

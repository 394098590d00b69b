//! Anchors and targets.
//!
//! An [`Anchor`] names one geometric property of one view in a custom container. Anchors are
//! tagged with a phantom kind so that only compatible anchors can be related: a width can be
//! equated with a height or a constant, but never with a horizontal position.
//!
//! ```
//! use finch::{equal, Id};
//!
//! # fn build(view: Id, label: Id) {
//! let constraints = vec![
//!     view.width().equal(200.),
//!     equal(label.leading(), view.leading() + 8.),
//!     label.edges().equal(view.edges().inset(finch::Insets::uniform(4.))),
//! ];
//! # }
//! ```

use crate::id::Id;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops;

/// Geometric properties of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Height,
    Width,
    CenterX,
    CenterY,
    Leading,
    Trailing,
    Top,
    Bottom,
}

/// Anchors that describe a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {}

/// Anchors on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {}

/// Anchors on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {}

/// Center points (only used for pairs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Center {}

/// An untyped anchor; what anchors become once kinds have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawAnchor {
    pub id: Id,
    pub property: Property,
}

/// A constant used in a constraint.
///
/// Compared and hashed by value, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialOrd)]
pub struct Offset(f64);

impl Offset {
    pub fn new(value: f64) -> Offset {
        // -0.0 + 0.0 == 0.0
        Offset(value + 0.)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Offset {
    fn eq(&self, other: &Offset) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Offset {}

impl Hash for Offset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// An untyped target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTarget {
    /// If none, the target is the constant `offset`.
    pub anchor: Option<RawAnchor>,
    pub offset: Offset,
}

/// A geometric property of an identified view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor<K> {
    raw: RawAnchor,
    kind: PhantomData<K>,
}

impl<K> Anchor<K> {
    pub(crate) fn new(id: Id, property: Property) -> Anchor<K> {
        Anchor {
            raw: RawAnchor { id, property },
            kind: PhantomData,
        }
    }

    pub fn id(&self) -> Id {
        self.raw.id
    }

    pub fn property(&self) -> Property {
        self.raw.property
    }

    pub(crate) fn raw(&self) -> RawAnchor {
        self.raw
    }
}

/// What an anchor of kind `K` can be set equal to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<K> {
    raw: RawTarget,
    kind: PhantomData<K>,
}

impl<K> Target<K> {
    fn from_raw(raw: RawTarget) -> Target<K> {
        Target {
            raw,
            kind: PhantomData,
        }
    }

    /// Returns this target moved by `constant`.
    pub fn add(self, constant: f64) -> Target<K> {
        Target::from_raw(RawTarget {
            anchor: self.raw.anchor,
            offset: Offset::new(self.raw.offset.value() + constant),
        })
    }

    /// The anchor this target refers to, if it is not a constant.
    pub fn anchor(&self) -> Option<RawAnchor> {
        self.raw.anchor
    }

    pub fn offset(&self) -> f64 {
        self.raw.offset.value()
    }

    pub(crate) fn raw(&self) -> RawTarget {
        self.raw
    }
}

impl Target<Size> {
    /// A fixed length.
    pub fn constant(value: f64) -> Target<Size> {
        Target::from_raw(RawTarget {
            anchor: None,
            offset: Offset::new(value),
        })
    }
}

impl<K> From<Anchor<K>> for Target<K> {
    fn from(anchor: Anchor<K>) -> Target<K> {
        Target::from_raw(RawTarget {
            anchor: Some(anchor.raw),
            offset: Offset::new(0.),
        })
    }
}

impl From<f64> for Target<Size> {
    fn from(value: f64) -> Target<Size> {
        Target::constant(value)
    }
}

impl<K> ops::Add<f64> for Anchor<K> {
    type Output = Target<K>;
    fn add(self, constant: f64) -> Target<K> {
        Target::from(self).add(constant)
    }
}

impl<K> ops::Sub<f64> for Anchor<K> {
    type Output = Target<K>;
    fn sub(self, constant: f64) -> Target<K> {
        self + -constant
    }
}

impl<K> ops::Add<f64> for Target<K> {
    type Output = Target<K>;
    fn add(self, constant: f64) -> Target<K> {
        Target::add(self, constant)
    }
}

impl<K> ops::Sub<f64> for Target<K> {
    type Output = Target<K>;
    fn sub(self, constant: f64) -> Target<K> {
        Target::add(self, -constant)
    }
}

/// Two anchors related together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPair<K> {
    first: RawAnchor,
    second: RawAnchor,
    kind: PhantomData<K>,
}

impl<K> AnchorPair<K> {
    pub(crate) fn new(first: RawAnchor, second: RawAnchor) -> AnchorPair<K> {
        AnchorPair {
            first,
            second,
            kind: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> (RawAnchor, RawAnchor) {
        (self.first, self.second)
    }
}

/// Two targets, one for each anchor of an [`AnchorPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetPair<K> {
    first: RawTarget,
    second: RawTarget,
    kind: PhantomData<K>,
}

impl<K> TargetPair<K> {
    pub(crate) fn raw(&self) -> (RawTarget, RawTarget) {
        (self.first, self.second)
    }

    /// Moves both targets by the same constant.
    pub fn add(self, constant: f64) -> TargetPair<K> {
        let shift = |raw: RawTarget| RawTarget {
            anchor: raw.anchor,
            offset: Offset::new(raw.offset.value() + constant),
        };
        TargetPair {
            first: shift(self.first),
            second: shift(self.second),
            kind: PhantomData,
        }
    }
}

impl<K> From<AnchorPair<K>> for TargetPair<K> {
    fn from(pair: AnchorPair<K>) -> TargetPair<K> {
        let target = |anchor| RawTarget {
            anchor: Some(anchor),
            offset: Offset::new(0.),
        };
        TargetPair {
            first: target(pair.first),
            second: target(pair.second),
            kind: PhantomData,
        }
    }
}

/// A fixed `(width, height)`.
impl From<(f64, f64)> for TargetPair<Size> {
    fn from((width, height): (f64, f64)) -> TargetPair<Size> {
        TargetPair {
            first: Target::constant(width).raw(),
            second: Target::constant(height).raw(),
            kind: PhantomData,
        }
    }
}

impl<K> ops::Add<f64> for AnchorPair<K> {
    type Output = TargetPair<K>;
    fn add(self, constant: f64) -> TargetPair<K> {
        TargetPair::from(self).add(constant)
    }
}

impl<K> ops::Sub<f64> for AnchorPair<K> {
    type Output = TargetPair<K>;
    fn sub(self, constant: f64) -> TargetPair<K> {
        self + -constant
    }
}

/// Per-edge insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Insets {
        Insets {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn zero() -> Insets {
        Insets::default()
    }

    /// The same inset on every edge.
    pub fn uniform(inset: f64) -> Insets {
        Insets::new(inset, inset, inset, inset)
    }
}

impl ops::Sub for Insets {
    type Output = Insets;
    fn sub(self, other: Insets) -> Insets {
        Insets {
            top: self.top - other.top,
            left: self.left - other.left,
            bottom: self.bottom - other.bottom,
            right: self.right - other.right,
        }
    }
}

/// The four edges of a view.
///
/// The left and right edges are the leading and trailing anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAnchors {
    id: Id,
    insets: Insets,
}

impl EdgeAnchors {
    pub(crate) fn new(id: Id, insets: Insets) -> EdgeAnchors {
        EdgeAnchors { id, insets }
    }

    /// Applies insets on top of the current ones.
    ///
    /// Insets accumulate by subtraction; see [`EdgeAnchors::equal`] for how they turn into
    /// offsets.
    pub fn inset(self, insets: Insets) -> EdgeAnchors {
        EdgeAnchors {
            id: self.id,
            insets: self.insets - insets,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }
}

/// The four edges of a view used as targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTargets {
    id: Id,
    insets: Insets,
}

impl EdgeTargets {
    /// Applies insets on top of the current ones, accumulating by subtraction.
    pub fn inset(self, insets: Insets) -> EdgeTargets {
        EdgeTargets {
            id: self.id,
            insets: self.insets - insets,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }
}

impl From<EdgeAnchors> for EdgeTargets {
    fn from(edges: EdgeAnchors) -> EdgeTargets {
        EdgeTargets {
            id: edges.id,
            insets: edges.insets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_composition() {
        let a = Id::new(1).leading();
        assert_eq!((a + 5.).add(-5.), a + 0.);
        assert_eq!(a + 0., Target::from(a));
        for k in &[0., 1., -3.5, 1e9] {
            assert_eq!(a - *k, a + -*k);
        }
    }

    #[test]
    fn test_negative_zero_offset() {
        let a = Id::new(2).width();
        assert_eq!(a - 0., a + 0.);
        assert_eq!(Target::constant(-0.), Target::constant(0.));
    }

    #[test]
    fn test_chained_targets() {
        let t = Id::CONTAINER.top() + 4. + 6. - 3.;
        assert_eq!(t.offset(), 7.);
        assert_eq!(
            t.anchor(),
            Some(RawAnchor {
                id: Id::CONTAINER,
                property: Property::Top
            })
        );
    }

    #[test]
    fn test_constant_targets() {
        let t: Target<Size> = 200.0.into();
        assert_eq!(t.anchor(), None);
        assert_eq!(t.offset(), 200.);
    }

    #[test]
    fn test_pair_offset() {
        let pair = Id::new(1).horizontal() + 3.;
        let (first, second) = pair.raw();
        assert_eq!(first.offset.value(), 3.);
        assert_eq!(second.offset.value(), 3.);
        assert_eq!(first.anchor.map(|a| a.property), Some(Property::Leading));
        assert_eq!(second.anchor.map(|a| a.property), Some(Property::Trailing));
    }

    #[test]
    fn test_insets_accumulate_by_subtraction() {
        let edges = Id::new(1).edges().inset(Insets::uniform(5.));
        assert_eq!(edges.insets(), Insets::uniform(-5.));

        let targets = EdgeTargets::from(Id::CONTAINER.edges())
            .inset(Insets::new(1., 2., 3., 4.))
            .inset(Insets::uniform(1.));
        assert_eq!(targets.insets(), Insets::new(-2., -3., -4., -5.));
    }
}

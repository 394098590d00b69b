//! Positional identifiers for the views of a custom container.

use crate::anchor::{
    Anchor, AnchorPair, Center, EdgeAnchors, Horizontal, Insets, Property, Size, Vertical,
};

/// Identifies one view inside a custom container.
///
/// `Id`s are handed to the constraint builder of [`Ui::custom`](crate::ui::Ui::custom): the first
/// one always refers to the container itself, the rest to its children in declaration order.
/// They only mean something inside the builder call that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(usize);

impl Id {
    /// The container.
    pub const CONTAINER: Id = Id(0);

    pub(crate) fn new(index: usize) -> Id {
        Id(index)
    }

    /// Position of the view: 0 for the container, 1-based for children.
    pub fn index(self) -> usize {
        self.0
    }

    pub fn height(self) -> Anchor<Size> {
        Anchor::new(self, Property::Height)
    }

    pub fn width(self) -> Anchor<Size> {
        Anchor::new(self, Property::Width)
    }

    /// Width and height.
    pub fn size(self) -> AnchorPair<Size> {
        AnchorPair::new(self.width().raw(), self.height().raw())
    }

    pub fn center_x(self) -> Anchor<Horizontal> {
        Anchor::new(self, Property::CenterX)
    }

    pub fn leading(self) -> Anchor<Horizontal> {
        Anchor::new(self, Property::Leading)
    }

    pub fn trailing(self) -> Anchor<Horizontal> {
        Anchor::new(self, Property::Trailing)
    }

    /// Leading and trailing edges.
    pub fn horizontal(self) -> AnchorPair<Horizontal> {
        AnchorPair::new(self.leading().raw(), self.trailing().raw())
    }

    pub fn center_y(self) -> Anchor<Vertical> {
        Anchor::new(self, Property::CenterY)
    }

    pub fn top(self) -> Anchor<Vertical> {
        Anchor::new(self, Property::Top)
    }

    pub fn bottom(self) -> Anchor<Vertical> {
        Anchor::new(self, Property::Bottom)
    }

    /// Top and bottom edges.
    pub fn vertical(self) -> AnchorPair<Vertical> {
        AnchorPair::new(self.top().raw(), self.bottom().raw())
    }

    /// Horizontal and vertical centers.
    pub fn center(self) -> AnchorPair<Center> {
        AnchorPair::new(self.center_x().raw(), self.center_y().raw())
    }

    /// All four edges, without insets.
    pub fn edges(self) -> EdgeAnchors {
        EdgeAnchors::new(self, Insets::zero())
    }
}

/// Hands out the identifiers for one container construction.
///
/// A fresh space is created for every container, so identifiers are never shared between two
/// containers.
#[derive(Debug)]
pub struct IdSpace {
    next: usize,
}

impl IdSpace {
    pub(crate) fn new() -> IdSpace {
        IdSpace { next: 1 }
    }

    pub(crate) fn container(&self) -> Id {
        Id::CONTAINER
    }

    /// Allocates the next child identifier.
    pub(crate) fn child(&mut self) -> Id {
        let id = Id(self.next);
        self.next += 1;
        id
    }
}

#[test]
fn test_id_space_is_sequential() {
    let mut space = IdSpace::new();
    assert_eq!(space.container(), Id::CONTAINER);
    assert_eq!(space.child(), Id(1));
    assert_eq!(space.child(), Id(2));

    let mut other = IdSpace::new();
    assert_eq!(other.child(), Id(1), "every space starts over");
}

//! Constraints between anchors.

use crate::anchor::{
    Anchor, AnchorPair, EdgeAnchors, EdgeTargets, Offset, Property, RawAnchor, RawTarget, Target,
    TargetPair,
};
use crate::id::Id;
use core::fmt;

/// Layout priority, from 0 to 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u16);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000);
    pub const DEFAULT_HIGH: Priority = Priority(750);
    pub const DEFAULT_LOW: Priority = Priority(250);
    pub const FITTING_SIZE: Priority = Priority(50);

    /// Creates a priority; values above 1000 are clamped.
    pub fn new(value: u16) -> Priority {
        Priority(value.min(1000))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self == Priority::REQUIRED
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::REQUIRED
    }
}

/// Relation between the two sides of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
}

/// One anchor set equal to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub anchor: RawAnchor,
    pub target: RawTarget,
}

impl Connection {
    /// Identifiers referenced by this connection.
    pub fn ids(&self) -> impl Iterator<Item = Id> {
        Some(self.anchor.id)
            .into_iter()
            .chain(self.target.anchor.map(|a| a.id))
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn side(f: &mut fmt::Formatter, a: RawAnchor) -> fmt::Result {
            write!(f, "#{}.{:?}", a.id.index(), a.property)
        }

        side(f, self.anchor)?;
        write!(f, " == ")?;
        match self.target.anchor {
            Some(anchor) => {
                side(f, anchor)?;
                match self.target.offset.value() {
                    o if o == 0. => Ok(()),
                    o if o < 0. => write!(f, " - {}", -o),
                    o => write!(f, " + {}", o),
                }
            }
            None => write!(f, "{}", self.target.offset.value()),
        }
    }
}

/// A prioritized equality over one or more connections.
///
/// Two constraints are equal if their priority, relation, and connections are, no matter how
/// they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    priority: Priority,
    relation: Relation,
    connections: Vec<Connection>,
}

impl Constraint {
    fn equal(connections: Vec<Connection>) -> Constraint {
        debug_assert!(!connections.is_empty());
        Constraint {
            priority: Priority::REQUIRED,
            relation: Relation::Equal,
            connections,
        }
    }

    /// Returns a copy with a different priority.
    pub fn with_priority(self, priority: Priority) -> Constraint {
        Constraint { priority, ..self }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The largest identifier this constraint refers to.
    pub(crate) fn max_id(&self) -> Id {
        self.connections
            .iter()
            .flat_map(Connection::ids)
            .max()
            .unwrap_or(Id::CONTAINER)
    }
}

/// Returns `constraint` with its priority replaced.
pub fn priority(priority: Priority, constraint: Constraint) -> Constraint {
    constraint.with_priority(priority)
}

/// Things that can be set equal to an `Rhs`.
pub trait Equal<Rhs> {
    fn equal(self, rhs: Rhs) -> Constraint;
}

/// Builds a required equality constraint.
pub fn equal<L: Equal<R>, R>(lhs: L, rhs: R) -> Constraint {
    lhs.equal(rhs)
}

impl<K> Anchor<K> {
    /// `self == target`.
    pub fn equal(self, target: impl Into<Target<K>>) -> Constraint {
        Constraint::equal(vec![Connection {
            anchor: self.raw(),
            target: target.into().raw(),
        }])
    }
}

impl<K> AnchorPair<K> {
    /// Sets both anchors equal to their respective targets.
    pub fn equal(self, targets: impl Into<TargetPair<K>>) -> Constraint {
        let (a, b) = self.raw();
        let (x, y) = targets.into().raw();
        Constraint::equal(vec![
            Connection {
                anchor: a,
                target: x,
            },
            Connection {
                anchor: b,
                target: y,
            },
        ])
    }
}

impl EdgeAnchors {
    /// Pins all four edges to the target's edges.
    ///
    /// With `d = targets.insets() - self.insets()`, the top and left edges are offset by `-d` and
    /// the bottom and right edges by `d`. Since [`inset`](EdgeAnchors::inset) subtracts, a plain
    /// `view.edges().inset(Insets::uniform(5.))` target pins the anchors 5 points inside it.
    pub fn equal(self, targets: impl Into<EdgeTargets>) -> Constraint {
        let targets = targets.into();
        let d = targets.insets() - self.insets();
        let edge = |property, offset: f64| Connection {
            anchor: RawAnchor {
                id: self.id(),
                property,
            },
            target: RawTarget {
                anchor: Some(RawAnchor {
                    id: targets.id(),
                    property,
                }),
                offset: Offset::new(offset),
            },
        };
        Constraint::equal(vec![
            edge(Property::Top, -d.top),
            edge(Property::Leading, -d.left),
            edge(Property::Bottom, d.bottom),
            edge(Property::Trailing, d.right),
        ])
    }
}

impl<K, T: Into<Target<K>>> Equal<T> for Anchor<K> {
    fn equal(self, rhs: T) -> Constraint {
        Anchor::equal(self, rhs)
    }
}

impl<K, T: Into<TargetPair<K>>> Equal<T> for AnchorPair<K> {
    fn equal(self, rhs: T) -> Constraint {
        AnchorPair::equal(self, rhs)
    }
}

impl<T: Into<EdgeTargets>> Equal<T> for EdgeAnchors {
    fn equal(self, rhs: T) -> Constraint {
        EdgeAnchors::equal(self, rhs)
    }
}

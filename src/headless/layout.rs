//! Solving headless view trees into frames.
//!
//! Every view gets four variables (x, y, width, height) in the root's coordinate space. The
//! solver is fed, in this order:
//!
//! - non-negative sizes, and the root's origin and size
//! - stack arrangement: arranged subviews are chained along the stack axis and fill it across
//! - intrinsic content size: hugging as `size <= intrinsic`, compression resistance as
//!   `size >= intrinsic`, each at its own priority
//! - every active constraint between two views of the tree

use super::{HeadlessBackend, HeadlessError, ViewId};
use crate::anchor::Property;
use crate::attribute::Axis;
use crate::backend::{NativeConstraint, NativeKind};
use crate::constraint::Priority;
use crate::rect::Rect;
use cgmath::{Point2, Vector2};
use kasuari::{Expression, Solver, Strength, Variable, WeightedRelation::*};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Solved frames of a view tree.
#[derive(Debug, Clone, Default)]
pub struct Frames {
    frames: HashMap<ViewId, Rect>,
}

impl Frames {
    pub fn get(&self, view: ViewId) -> Option<Rect> {
        self.frames.get(&view).copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, Rect)> + '_ {
        self.frames.iter().map(|(id, rect)| (*id, *rect))
    }
}

#[derive(Debug, Clone, Copy)]
struct Vars {
    x: Variable,
    y: Variable,
    width: Variable,
    height: Variable,
}

impl Vars {
    fn new() -> Vars {
        Vars {
            x: Variable::new(),
            y: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
        }
    }

    fn expression(&self, property: Property) -> Expression {
        match property {
            Property::Leading => self.x.into(),
            Property::Top => self.y.into(),
            Property::Width => self.width.into(),
            Property::Height => self.height.into(),
            Property::Trailing => self.x + self.width,
            Property::Bottom => self.y + self.height,
            Property::CenterX => self.x + self.width * 0.5,
            Property::CenterY => self.y + self.height * 0.5,
        }
    }

    fn size(&self, axis: Axis) -> Variable {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Maps a layout priority onto a solver strength.
///
/// Optional priorities scale linearly up to `STRONG`, so a higher priority always outweighs a
/// lower one. Priority 1 lands on `MEDIUM`, which keeps every priority above the weak pull toward
/// fitting size.
fn strength(priority: Priority) -> Strength {
    if priority.is_required() {
        Strength::REQUIRED
    } else {
        Strength::STRONG * (f64::from(priority.value()) / 1000.)
    }
}

struct Layout {
    solver: Solver,
    vars: HashMap<ViewId, Vars>,
}

impl Layout {
    fn add(
        &mut self,
        constraint: kasuari::Constraint,
        describe: impl FnOnce() -> String,
    ) -> Result<(), HeadlessError> {
        self.solver.add_constraint(constraint).map_err(|e| match e {
            kasuari::AddConstraintError::UnsatisfiableConstraint => {
                HeadlessError::Unsatisfiable(describe())
            }
            kasuari::AddConstraintError::DuplicateConstraint => {
                HeadlessError::Solver(format!("duplicate constraint: {}", describe()))
            }
            kasuari::AddConstraintError::InternalSolverError(msg) => {
                HeadlessError::Solver(format!("{} ({})", msg, describe()))
            }
        })
    }

    fn arrange(&mut self, stack: ViewId, axis: Axis, arranged: &[ViewId]) -> Result<(), HeadlessError> {
        let (start, end, cross_start, cross_size) = match axis {
            Axis::Horizontal => (Property::Leading, Property::Trailing, Property::Top, Property::Height),
            Axis::Vertical => (Property::Top, Property::Bottom, Property::Leading, Property::Width),
        };
        let stack_vars = self.vars[&stack];

        let mut edge = stack_vars.expression(start);
        for child in arranged {
            let child_vars = self.vars[child];
            let describe = || format!("arranged subview {} of stack {}", child, stack);
            self.add(child_vars.expression(start) | EQ(Strength::REQUIRED) | edge, describe)?;
            self.add(
                child_vars.expression(cross_start)
                    | EQ(Strength::REQUIRED)
                    | stack_vars.expression(cross_start),
                describe,
            )?;
            self.add(
                child_vars.expression(cross_size)
                    | EQ(Strength::REQUIRED)
                    | stack_vars.expression(cross_size),
                describe,
            )?;
            edge = child_vars.expression(end);
        }
        self.add(stack_vars.expression(end) | EQ(Strength::REQUIRED) | edge, || {
            format!("end of stack {}", stack)
        })
    }

    fn intrinsic(
        &mut self,
        view: ViewId,
        axis: Axis,
        length: f64,
        hugging: Priority,
        compression_resistance: Priority,
    ) -> Result<(), HeadlessError> {
        let size = self.vars[&view].size(axis);
        let describe = || format!("intrinsic {:?} size {} of {}", axis, length, view);
        self.add(Expression::from(size) | LE(strength(hugging)) | length, describe)?;
        self.add(
            Expression::from(size) | GE(strength(compression_resistance)) | length,
            describe,
        )
    }

    fn activate(&mut self, constraint: &NativeConstraint<ViewId>) -> Result<(), HeadlessError> {
        let first = self.vars[&constraint.first.view].expression(constraint.first.property);
        let relation = EQ(strength(constraint.priority));
        let describe = || format!("{:?}", constraint);
        match &constraint.second {
            Some(second) => {
                let second = self.vars[&second.view].expression(second.property);
                self.add(
                    first | relation | second * constraint.multiplier + constraint.constant,
                    describe,
                )
            }
            None => self.add(first | relation | constraint.constant, describe),
        }
    }
}

pub(super) fn solve(
    backend: &HeadlessBackend,
    root: ViewId,
    size: Option<Vector2<f64>>,
) -> Result<Frames, HeadlessError> {
    if !backend.contains(root) {
        return Err(HeadlessError::NoSuchView(root));
    }
    let views = backend.descendants(root);
    let mut layout = Layout {
        solver: Solver::new(),
        vars: views.iter().map(|id| (*id, Vars::new())).collect(),
    };

    let root_vars = layout.vars[&root];
    layout.add(Expression::from(root_vars.x) | EQ(Strength::REQUIRED) | 0., || {
        "root x".to_string()
    })?;
    layout.add(Expression::from(root_vars.y) | EQ(Strength::REQUIRED) | 0., || {
        "root y".to_string()
    })?;
    let (root_size, root_strength) = match size {
        Some(size) => (size, Strength::REQUIRED),
        None => (Vector2::new(0., 0.), Strength::WEAK),
    };
    layout.add(
        Expression::from(root_vars.width) | EQ(root_strength) | root_size.x,
        || format!("root width {}", root_size.x),
    )?;
    layout.add(
        Expression::from(root_vars.height) | EQ(root_strength) | root_size.y,
        || format!("root height {}", root_size.y),
    )?;

    let config = backend.config();
    for id in &views {
        let node = match backend.view(*id) {
            Some(node) => node,
            None => continue,
        };
        let vars = layout.vars[id];
        layout.add(Expression::from(vars.width) | GE(Strength::REQUIRED) | 0., || {
            format!("width of {} >= 0", id)
        })?;
        layout.add(Expression::from(vars.height) | GE(Strength::REQUIRED) | 0., || {
            format!("height of {} >= 0", id)
        })?;

        if node.kind() == NativeKind::Stack {
            let axis = node.properties().axis.unwrap_or(Axis::Vertical);
            layout.arrange(*id, axis, node.arranged_subviews())?;
        }

        if let Some(intrinsic) = node.intrinsic_size(config) {
            for (axis, length) in &[(Axis::Horizontal, intrinsic.x), (Axis::Vertical, intrinsic.y)] {
                let properties = node.properties();
                let hugging = properties.hugging.get(*axis).unwrap_or(config.default_hugging);
                let compression_resistance = properties
                    .compression_resistance
                    .get(*axis)
                    .unwrap_or(config.default_compression_resistance);
                layout.intrinsic(*id, *axis, *length, hugging, compression_resistance)?;
            }
        }
    }

    let mut active = 0;
    for constraint in backend.constraints() {
        let in_tree = layout.vars.contains_key(&constraint.first.view)
            && constraint
                .second
                .as_ref()
                .map_or(true, |second| layout.vars.contains_key(&second.view));
        if in_tree {
            trace!("solving {:?}", constraint);
            layout.activate(constraint)?;
            active += 1;
        }
    }
    debug!("solving {} views with {} active constraints", views.len(), active);

    let values: HashMap<Variable, f64> = layout.solver.fetch_changes().iter().copied().collect();
    let value = |variable: Variable| values.get(&variable).copied().unwrap_or(0.);
    let frames = layout
        .vars
        .iter()
        .map(|(id, vars)| {
            let rect = Rect::new(
                Point2::new(value(vars.x), value(vars.y)),
                Vector2::new(value(vars.width), value(vars.height)),
            );
            (*id, rect)
        })
        .collect();
    Ok(Frames { frames })
}

#[test]
fn test_strength_increases_with_priority() {
    let mut last = Strength::WEAK;
    for value in 1..1000 {
        let current = strength(Priority::new(value));
        assert!(current > last, "priority {} does not outweigh {}", value, value - 1);
        assert!(current < Strength::REQUIRED);
        last = current;
    }
    assert_eq!(strength(Priority::REQUIRED), Strength::REQUIRED);
}

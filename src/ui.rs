//! UI descriptions.

use crate::attribute::{Attribute, Axis};
use crate::color::Color;
use crate::constraint::Constraint;
use crate::id::{Id, IdSpace};
use cgmath::Vector2;
use std::collections::HashSet;

/// Text alignment in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

impl Default for TextAlignment {
    fn default() -> Self {
        TextAlignment::Natural
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A font.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family, or the system font if none.
    pub family: Option<String>,
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    pub fn system(size: f64) -> Font {
        Font {
            family: None,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold_system(size: f64) -> Font {
        Font {
            family: None,
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// A handle to an image resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Resource name.
    pub name: String,
    /// Natural size in points.
    pub size: Vector2<f64>,
}

impl Image {
    pub fn new(name: impl Into<String>, size: Vector2<f64>) -> Image {
        Image {
            name: name.into(),
            size,
        }
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Maximum number of lines; 0 means unlimited.
    pub number_of_lines: usize,
    pub text: String,
    pub alignment: TextAlignment,
    pub color: Option<Color>,
    pub font: Option<Font>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Label {
        Label {
            number_of_lines: 1,
            text: text.into(),
            alignment: TextAlignment::Natural,
            color: None,
            font: None,
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Label {
        Label::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Label {
        Label::new(text)
    }
}

/// An editable text field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextField {
    pub placeholder: String,
    pub text: String,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>, text: impl Into<String>) -> TextField {
        TextField {
            placeholder: placeholder.into(),
            text: text.into(),
        }
    }
}

/// The kind of a UI element and its kind-specific properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<M> {
    Button {
        title: String,
    },
    /// A container whose children are laid out by constraints.
    Custom {
        constraints: HashSet<Constraint>,
        children: Vec<Ui<M>>,
    },
    Image(Image),
    Label(Label),
    Stack {
        children: Vec<Ui<M>>,
        axis: Axis,
    },
    TextField(TextField),
}

/// An element in a user interface.
///
/// This is only a description: creating one never touches the backend. Descriptions are plain
/// values and can be compared, cloned, and kept around.
#[derive(Debug, Clone, PartialEq)]
pub struct Ui<M> {
    attributes: Vec<Attribute<M>>,
    element: Element<M>,
}

impl<M> Ui<M> {
    fn new(attributes: Vec<Attribute<M>>, element: Element<M>) -> Ui<M> {
        Ui {
            attributes,
            element,
        }
    }

    pub fn attributes(&self) -> &[Attribute<M>] {
        &self.attributes
    }

    pub fn element(&self) -> &Element<M> {
        &self.element
    }

    /// Children, in order. Empty for leaf elements.
    pub fn children(&self) -> &[Ui<M>] {
        match &self.element {
            Element::Custom { children, .. } | Element::Stack { children, .. } => children,
            _ => &[],
        }
    }

    /// Number of elements in this tree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children().iter().map(Ui::len).sum::<usize>()
    }

    pub fn button(attributes: Vec<Attribute<M>>, title: impl Into<String>) -> Ui<M> {
        Ui::new(
            attributes,
            Element::Button {
                title: title.into(),
            },
        )
    }

    /// A button that sends `message` when tapped.
    pub fn action_button(title: impl Into<String>, message: M) -> Ui<M> {
        Ui::button(vec![Attribute::on_touch_up_inside(message)], title)
    }

    pub fn image(attributes: Vec<Attribute<M>>, image: Image) -> Ui<M> {
        Ui::new(attributes, Element::Image(image))
    }

    pub fn label(attributes: Vec<Attribute<M>>, label: impl Into<Label>) -> Ui<M> {
        Ui::new(attributes, Element::Label(label.into()))
    }

    pub fn text_field(attributes: Vec<Attribute<M>>, text_field: TextField) -> Ui<M> {
        Ui::new(attributes, Element::TextField(text_field))
    }

    pub fn stack(attributes: Vec<Attribute<M>>, children: Vec<Ui<M>>, axis: Axis) -> Ui<M> {
        Ui::new(attributes, Element::Stack { children, axis })
    }

    /// A container laid out with constraints.
    ///
    /// `children` is a tuple of up to five elements. The builder receives the identifiers of
    /// the container and each child, in order, and returns the constraints between them.
    ///
    /// ```
    /// use finch::{Attribute, Color, Id, Ui};
    ///
    /// let ui: Ui<()> = Ui::custom(
    ///     vec![Attribute::background_color(Color::LIGHT_GRAY)],
    ///     (Ui::label(vec![], "Label"),),
    ///     |(view, label): (Id, Id)| {
    ///         vec![
    ///             view.width().equal(200.),
    ///             view.height().equal(50.),
    ///             label.center().equal(view.center()),
    ///         ]
    ///     },
    /// );
    /// ```
    pub fn custom<C, F, I>(attributes: Vec<Attribute<M>>, children: C, builder: F) -> Ui<M>
    where
        C: Children<M>,
        F: FnOnce(C::Ids) -> I,
        I: IntoIterator<Item = Constraint>,
    {
        let mut ids = IdSpace::new();
        let (children, ids) = children.into_children(&mut ids);
        let constraints = builder(ids).into_iter().collect();
        Ui::new(
            attributes,
            Element::Custom {
                constraints,
                children,
            },
        )
    }

    /// A container laid out with constraints, with any number of children.
    ///
    /// The builder receives the container identifier and the child identifiers in order.
    pub fn custom_list<F, I>(attributes: Vec<Attribute<M>>, children: Vec<Ui<M>>, builder: F) -> Ui<M>
    where
        F: FnOnce(Id, &[Id]) -> I,
        I: IntoIterator<Item = Constraint>,
    {
        let mut space = IdSpace::new();
        let ids: Vec<_> = children.iter().map(|_| space.child()).collect();
        let constraints = builder(space.container(), &ids).into_iter().collect();
        Ui::new(
            attributes,
            Element::Custom {
                constraints,
                children,
            },
        )
    }
}

/// A fixed number of children for [`Ui::custom`].
///
/// Implemented for `()` and tuples of up to five `Ui`s.
pub trait Children<M> {
    /// The identifiers handed to the constraint builder.
    type Ids;

    #[doc(hidden)]
    fn into_children(self, ids: &mut IdSpace) -> (Vec<Ui<M>>, Self::Ids);
}

impl<M> Children<M> for () {
    type Ids = Id;

    fn into_children(self, ids: &mut IdSpace) -> (Vec<Ui<M>>, Id) {
        (Vec::new(), ids.container())
    }
}

macro_rules! impl_children {
    (@ui $child:ident) => { Ui<M> };
    (@id $child:ident) => { Id };
    (@next $space:ident $child:ident) => { $space.child() };
    ($(($($child:ident),+)),+ $(,)?) => {
        $(
            impl<M> Children<M> for ($(impl_children!(@ui $child),)+) {
                type Ids = (Id, $(impl_children!(@id $child),)+);

                fn into_children(self, space: &mut IdSpace) -> (Vec<Ui<M>>, Self::Ids) {
                    let ($($child,)+) = self;
                    let ids = (space.container(), $(impl_children!(@next space $child),)+);
                    (vec![$($child),+], ids)
                }
            }
        )+
    };
}

impl_children!((a), (a, b), (a, b, c), (a, b, c, d), (a, b, c, d, e));

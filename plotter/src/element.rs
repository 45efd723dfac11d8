use crate::math::{Point, Size};
use crate::transform::Transform;

/// The drawable content of an element.
///
/// The set of element kinds is closed: the compiler dispatches over this
/// enum and nothing else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// A path described by an SVG path-data string.
    Path { data: String },
    Circle { center: Point, radius: f32 },
    Rect { origin: Point, size: Size },
    Line { from: Point, to: Point },
    Polyline { points: Vec<Point> },
    Polygon { points: Vec<Point> },
    /// A group only carries a transform and children.
    Group { children: Vec<Element> },
}

/// One node of the document tree handed to the compiler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Element {
    pub kind: ElementKind,
    pub id: Option<String>,
    pub transform: Transform,
    pub hidden: bool,
    pub opacity: Option<f32>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Element {
            kind,
            id: None,
            transform: Transform::identity(),
            hidden: false,
            opacity: None,
        }
    }

    pub fn path(data: &str) -> Self {
        Element::new(ElementKind::Path { data: data.to_string() })
    }

    pub fn circle(center: Point, radius: f32) -> Self {
        Element::new(ElementKind::Circle { center, radius })
    }

    pub fn rect(origin: Point, size: Size) -> Self {
        Element::new(ElementKind::Rect { origin, size })
    }

    pub fn line(from: Point, to: Point) -> Self {
        Element::new(ElementKind::Line { from, to })
    }

    pub fn polyline(points: Vec<Point>) -> Self {
        Element::new(ElementKind::Polyline { points })
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Element::new(ElementKind::Polygon { points })
    }

    pub fn group(children: Vec<Element>) -> Self {
        Element::new(ElementKind::Group { children })
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Whether this element contributes geometry.
    ///
    /// Elements that are flagged hidden, fully transparent, or whose id
    /// contains the reserved `pin` marker (connection points on schematic
    /// symbols) are excluded from both conversion and bounds computation.
    pub fn is_drawable(&self) -> bool {
        if self.hidden || self.opacity == Some(0.0) {
            return false;
        }

        match self.id {
            Some(ref id) => !id.to_lowercase().contains("pin"),
            None => true,
        }
    }
}

#[test]
fn drawable_filtering() {
    use crate::math::point;

    assert!(Element::circle(point(0.0, 0.0), 1.0).is_drawable());
    assert!(!Element::circle(point(0.0, 0.0), 1.0).with_hidden(true).is_drawable());
    assert!(!Element::circle(point(0.0, 0.0), 1.0).with_opacity(0.0).is_drawable());
    assert!(Element::circle(point(0.0, 0.0), 1.0).with_opacity(0.5).is_drawable());
    assert!(!Element::circle(point(0.0, 0.0), 1.0).with_id("Pin_3").is_drawable());
    assert!(Element::circle(point(0.0, 0.0), 1.0).with_id("body").is_drawable());
}

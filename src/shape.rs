use crate::foundation::core::{Aabb, Vec3};

/// Group a logo sub-shape belongs to. Drives styling and arrival direction.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PrimaryCenterpiece,
    LeftAccessory,
    RightAccessory,
    TopText,
    BottomText,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::PrimaryCenterpiece,
        Category::LeftAccessory,
        Category::RightAccessory,
        Category::TopText,
        Category::BottomText,
        Category::Miscellaneous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryCenterpiece => "primary_centerpiece",
            Self::LeftAccessory => "left_accessory",
            Self::RightAccessory => "right_accessory",
            Self::TopText => "top_text",
            Self::BottomText => "bottom_text",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// Position in the category presentation order (centerpiece first).
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-shape as handed over by the vector import step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeInput {
    pub id: String,
    pub bounds: Aabb,
}

impl ShapeInput {
    pub fn new(id: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// A classified sub-shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub id: String,
    pub bounds: Aabb,
    pub category: Category,
    /// Offset from the final position at which the entrance starts.
    pub arrival: Vec3,
}

impl Shape {
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }

    pub fn start_position(&self) -> Vec3 {
        self.center().add(self.arrival)
    }
}

/// Input file layout: `{"shapes": [...]}`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShapeSet {
    pub shapes: Vec<ShapeInput>,
}

use crate::shape::Shape;

/// Order in which classified shapes enter the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationOrder {
    /// As imported.
    #[default]
    Input,
    /// Centerpiece, wings, then text, then everything else.
    Category,
    /// By center x, left first.
    LeftToRight,
}

/// Stable reordering; shapes that compare equal keep their import order.
pub fn arrange(mut shapes: Vec<Shape>, order: PresentationOrder) -> Vec<Shape> {
    match order {
        PresentationOrder::Input => {}
        PresentationOrder::Category => shapes.sort_by_key(|s| s.category.rank()),
        PresentationOrder::LeftToRight => {
            shapes.sort_by(|a, b| a.center().x.total_cmp(&b.center().x));
        }
    }
    shapes
}

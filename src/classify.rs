use crate::{
    foundation::core::Vec3,
    foundation::error::{RevealError, RevealResult},
    shape::{Category, Shape, ShapeInput},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub centerpiece_min_size: f64,
    pub left_x: f64,
    pub right_x: f64,
    pub top_z: f64,
    pub bottom_z: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            centerpiece_min_size: 1.0,
            left_x: -2.0,
            right_x: 2.0,
            top_z: 3.0,
            bottom_z: -3.0,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> RevealResult<()> {
        let all = [
            self.centerpiece_min_size,
            self.left_x,
            self.right_x,
            self.top_z,
            self.bottom_z,
        ];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(RevealError::configuration(
                "category thresholds must be finite",
            ));
        }
        if self.left_x > self.right_x {
            return Err(RevealError::configuration(
                "thresholds: left_x must be <= right_x",
            ));
        }
        if self.bottom_z > self.top_z {
            return Err(RevealError::configuration(
                "thresholds: bottom_z must be <= top_z",
            ));
        }
        Ok(())
    }

    /// Inside the horizontal and vertical bands, i.e. none of the side/text rules apply.
    pub fn near_origin(&self, p: Vec3) -> bool {
        self.left_x <= p.x && p.x <= self.right_x && self.bottom_z <= p.z && p.z <= self.top_z
    }
}

/// Point the classification rules are evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    #[default]
    Origin,
    /// Mean center of all shapes in the pass.
    Centroid,
}

/// Start offset per category, relative to the shape's final position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArrivalTable {
    pub primary_centerpiece: Vec3,
    pub left_accessory: Vec3,
    pub right_accessory: Vec3,
    pub top_text: Vec3,
    pub bottom_text: Vec3,
    pub miscellaneous: Vec3,
}

impl Default for ArrivalTable {
    fn default() -> Self {
        Self {
            primary_centerpiece: Vec3::new(0.0, 20.0, 0.0),
            left_accessory: Vec3::new(-15.0, 15.0, 5.0),
            right_accessory: Vec3::new(15.0, 15.0, 5.0),
            top_text: Vec3::new(0.0, 12.0, 10.0),
            bottom_text: Vec3::new(0.0, 12.0, -8.0),
            miscellaneous: Vec3::new(0.0, 15.0, 0.0),
        }
    }
}

impl ArrivalTable {
    pub fn get(&self, category: Category) -> Vec3 {
        match category {
            Category::PrimaryCenterpiece => self.primary_centerpiece,
            Category::LeftAccessory => self.left_accessory,
            Category::RightAccessory => self.right_accessory,
            Category::TopText => self.top_text,
            Category::BottomText => self.bottom_text,
            Category::Miscellaneous => self.miscellaneous,
        }
    }

    pub fn validate(&self) -> RevealResult<()> {
        for c in Category::ALL {
            if !self.get(c).is_finite() {
                return Err(RevealError::configuration(format!(
                    "arrival offset for '{c}' must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Category of a shape with the given (reference-relative) center and size.
///
/// Rules are checked in a fixed order and the first match wins; a large shape
/// outside the central bands is a side accessory or text, never the centerpiece.
pub fn classify(center: Vec3, size: f64, t: &Thresholds) -> Category {
    if size > t.centerpiece_min_size && t.near_origin(center) {
        Category::PrimaryCenterpiece
    } else if center.x < t.left_x {
        Category::LeftAccessory
    } else if center.x > t.right_x {
        Category::RightAccessory
    } else if center.z > t.top_z {
        Category::TopText
    } else if center.z < t.bottom_z {
        Category::BottomText
    } else {
        Category::Miscellaneous
    }
}

pub fn centroid(inputs: &[ShapeInput]) -> Vec3 {
    if inputs.is_empty() {
        return Vec3::ZERO;
    }
    let sum = inputs
        .iter()
        .fold(Vec3::ZERO, |acc, s| acc.add(s.bounds.center()));
    sum.scale(1.0 / inputs.len() as f64)
}

#[tracing::instrument(skip_all, fields(shapes = inputs.len()))]
pub fn classify_all(
    inputs: &[ShapeInput],
    thresholds: &Thresholds,
    arrivals: &ArrivalTable,
    reference: Reference,
) -> Vec<Shape> {
    let origin = match reference {
        Reference::Origin => Vec3::ZERO,
        Reference::Centroid => centroid(inputs),
    };

    inputs
        .iter()
        .map(|input| {
            let center = input.bounds.center().sub(origin);
            let size = input.bounds.size();
            let category = classify(center, size, thresholds);
            tracing::debug!(id = %input.id, %category, size, "classified shape");
            Shape {
                id: input.id.clone(),
                bounds: input.bounds,
                category,
                arrival: arrivals.get(category),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Aabb;

    fn t() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn large_central_shape_is_centerpiece() {
        assert_eq!(
            classify(Vec3::ZERO, 1.5, &t()),
            Category::PrimaryCenterpiece
        );
    }

    #[test]
    fn small_left_shape_is_left_accessory() {
        assert_eq!(
            classify(Vec3::new(-3.0, 0.0, 0.0), 0.2, &t()),
            Category::LeftAccessory
        );
    }

    #[test]
    fn large_off_center_shape_is_not_centerpiece() {
        assert_eq!(
            classify(Vec3::new(2.5, 0.0, 0.0), 4.0, &t()),
            Category::RightAccessory
        );
        assert_eq!(
            classify(Vec3::new(0.0, 0.0, 3.5), 4.0, &t()),
            Category::TopText
        );
    }

    #[test]
    fn side_rules_win_over_text_rules() {
        assert_eq!(
            classify(Vec3::new(-2.5, 0.0, 5.0), 0.1, &t()),
            Category::LeftAccessory
        );
        assert_eq!(
            classify(Vec3::new(0.0, 0.0, -4.0), 0.1, &t()),
            Category::BottomText
        );
    }

    #[test]
    fn boundary_values_are_not_past_the_threshold() {
        assert_eq!(
            classify(Vec3::new(-2.0, 0.0, 3.0), 0.5, &t()),
            Category::Miscellaneous
        );
        assert_eq!(
            classify(Vec3::new(2.0, 0.0, -3.0), 1.0, &t()),
            Category::Miscellaneous
        );
    }

    #[test]
    fn zero_volume_and_nan_fall_through() {
        let b = Aabb::point(Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(classify(b.center(), b.size(), &t()), Category::Miscellaneous);
        assert_eq!(
            classify(Vec3::new(f64::NAN, 0.0, f64::NAN), f64::NAN, &t()),
            Category::Miscellaneous
        );
    }

    #[test]
    fn depth_does_not_affect_category() {
        for y in [-50.0, 0.0, 50.0] {
            assert_eq!(
                classify(Vec3::new(0.0, y, 0.0), 2.0, &t()),
                Category::PrimaryCenterpiece
            );
        }
    }

    #[test]
    fn classify_all_attaches_arrivals() {
        let inputs = vec![
            ShapeInput::new(
                "key",
                Aabb::from_center_size(Vec3::ZERO, Vec3::new(1.2, 0.1, 2.0)),
            ),
            ShapeInput::new(
                "wing",
                Aabb::from_center_size(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.2, 0.1, 0.2)),
            ),
        ];
        let arrivals = ArrivalTable::default();
        let shapes = classify_all(&inputs, &t(), &arrivals, Reference::Origin);
        assert_eq!(shapes[0].category, Category::PrimaryCenterpiece);
        assert_eq!(shapes[0].arrival, Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(shapes[1].category, Category::LeftAccessory);
        assert_eq!(shapes[1].arrival, arrivals.left_accessory);
    }

    #[test]
    fn centroid_reference_shifts_the_bands() {
        // Whole logo sits at x=10; relative to origin everything is "right".
        let inputs = vec![
            ShapeInput::new(
                "a",
                Aabb::from_center_size(Vec3::new(10.0, 0.0, 0.0), Vec3::new(2.0, 0.1, 2.0)),
            ),
            ShapeInput::new(
                "b",
                Aabb::from_center_size(Vec3::new(7.0, 0.0, 0.0), Vec3::new(0.2, 0.1, 0.2)),
            ),
            ShapeInput::new(
                "c",
                Aabb::from_center_size(Vec3::new(13.0, 0.0, 0.0), Vec3::new(0.2, 0.1, 0.2)),
            ),
        ];
        let arrivals = ArrivalTable::default();

        let by_origin = classify_all(&inputs, &t(), &arrivals, Reference::Origin);
        assert!(
            by_origin
                .iter()
                .all(|s| s.category == Category::RightAccessory)
        );

        let by_centroid = classify_all(&inputs, &t(), &arrivals, Reference::Centroid);
        let cats: Vec<Category> = by_centroid.iter().map(|s| s.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::PrimaryCenterpiece,
                Category::LeftAccessory,
                Category::RightAccessory
            ]
        );
    }

    #[test]
    fn validate_rejects_crossed_bands() {
        let mut bad = t();
        bad.left_x = 3.0;
        assert!(bad.validate().unwrap_err().is_configuration());

        let mut bad = t();
        bad.top_z = f64::INFINITY;
        assert!(bad.validate().is_err());

        assert!(t().validate().is_ok());
    }
}

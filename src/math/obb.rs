use super::{heading_dir, rot90, Point2d, Vector2d};

/// A rectangle oriented along its direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    /// The corners in world space, ordered rear-left, front-left,
    /// front-right, rear-right relative to the heading.
    corners: [Point2d; 4],
}

impl OrientedBox {
    /// Creates a box from its centre and dimensions, oriented along `vel`.
    ///
    /// # Parameters
    /// * `centre` - The centre of the box in world space
    /// * `length` - The extent of the box along its heading
    /// * `width` - The extent of the box across its heading
    /// * `vel` - The velocity of the box, which determines its heading
    pub fn new(centre: Point2d, length: f64, width: f64, vel: Vector2d) -> Self {
        let long = 0.5 * length * heading_dir(vel);
        let lat = 0.5 * width * rot90(heading_dir(vel));
        Self {
            corners: [
                centre - long + lat,
                centre + long + lat,
                centre + long - lat,
                centre - long - lat,
            ],
        }
    }

    /// The four corners of the box in a consistent winding order.
    pub fn corners(&self) -> &[Point2d; 4] {
        &self.corners
    }

    /// The vectors along each edge, from each corner to the next.
    pub fn edges(&self) -> impl Iterator<Item = Vector2d> + '_ {
        use itertools::Itertools;
        self.corners
            .iter()
            .circular_tuple_windows()
            .map(|(from, to)| *to - *from)
    }
}

use crate::core::models::atom::AtomRecord;
use nalgebra::{Point3, Vector3};

/// Target size of the largest bounding-box dimension after normalization.
pub const NORMALIZED_EXTENT: f64 = 8.0;

/// The minimal axis-aligned box containing a set of points.
///
/// Degenerates to a point along any dimension where all members coincide
/// (min == max); downstream scale computation must tolerate that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Computes the bounding box over a record group, or `None` for an empty
    /// group.
    pub fn from_records(records: &[AtomRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut min = first.position;
        let mut max = first.position;

        for record in &records[1..] {
            let p = record.position;
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }

        Some(Self { min, max })
    }

    /// Per-axis extents of the box.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// The largest of the three axis extents.
    pub fn max_extent(&self) -> f64 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }
}

/// Centers a record group at the origin and uniformly scales it so its
/// largest bounding-box dimension equals [`NORMALIZED_EXTENT`].
///
/// An empty group is returned unchanged. A degenerate group (one record, or
/// all records coincident) gets a scale of 1, which still maps every point
/// to the origin since the center equals the point. Non-geometric fields are
/// copied unchanged and output order matches input order.
///
/// # Arguments
///
/// * `records` - The record group to normalize.
///
/// # Return
///
/// Returns a new group of identical cardinality with transformed positions.
pub fn normalize_records(records: &[AtomRecord]) -> Vec<AtomRecord> {
    let Some(bounds) = BoundingBox::from_records(records) else {
        return Vec::new();
    };

    let max_extent = bounds.max_extent();
    let scale = if max_extent > 0.0 {
        NORMALIZED_EXTENT / max_extent
    } else {
        1.0
    };
    let center = bounds.center();

    records
        .iter()
        .map(|record| record.with_position(Point3::from((record.position - center) * scale)))
        .collect()
}

use crate::float_types::Real;
use nalgebra::Point3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// An inverted box that any point will grow; `is_empty()` until then.
    #[inline]
    pub fn empty() -> Self {
        Self {
            mins: Point3::new(Real::MAX, Real::MAX, Real::MAX),
            maxs: Point3::new(-Real::MAX, -Real::MAX, -Real::MAX),
        }
    }

    /// Smallest box containing every point of `points`.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut aabb = Self::empty();
        for p in points {
            aabb.grow(p);
        }
        aabb
    }

    #[inline]
    pub fn grow(&mut self, p: &Point3<Real>) {
        self.mins.x = self.mins.x.min(p.x);
        self.mins.y = self.mins.y.min(p.y);
        self.mins.z = self.mins.z.min(p.z);
        self.maxs.x = self.maxs.x.max(p.x);
        self.maxs.y = self.maxs.y.max(p.y);
        self.maxs.z = self.maxs.z.max(p.z);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x || self.mins.y > self.maxs.y || self.mins.z > self.maxs.z
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
            && self.maxs.z >= other.mins.z
            && self.mins.z <= other.maxs.z
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    /// Extent along z.
    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.z - self.mins.z
    }
}

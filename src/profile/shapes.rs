//! Closed 2D outlines used by every dial element.
//!
//! All shapes are centered on the origin unless stated otherwise; callers
//! place them with [`TransformOps`].

use crate::float_types::{PI, Real, TAU, tolerance};
use crate::profile::{Profile, dedup_ring};
use crate::traits::TransformOps;
use geo::{Area, LineString, Polygon as GeoPolygon};
use std::fmt::Debug;

/// Segments used for small circular outlines (markers, pivots, frames).
pub const CIRCLE_SEGMENTS: usize = 128;
/// Segments per cubic Bezier of the crescent outline.
const BEZIER_SEGMENTS: usize = 32;
/// Segments of the crescent's lower semicircle.
const CRESCENT_ARC_SEGMENTS: usize = 128;

/// Description of an outline, turned into geometry by [`ProfileShape::build`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileShape {
    Circle {
        radius: Real,
    },
    /// Annulus; an inner radius of zero gives a disc.
    Ring {
        outer_radius: Real,
        inner_radius: Real,
    },
    Rectangle {
        width: Real,
        height: Real,
    },
    /// Trapezoid along +Y with the wider end usually at the top. `cutout`
    /// in `(0, 1)` punches a scaled copy of the outline.
    Trapezoid {
        top_width: Real,
        bottom_width: Real,
        length: Real,
        cutout: Real,
    },
    Crescent {
        radius: Real,
    },
    /// Half outline (x >= 0) mirrored about the Y axis, with an optional
    /// notch cut from another mirrored half outline.
    Mirrored {
        points: Vec<[Real; 2]>,
        cutout: Option<Vec<[Real; 2]>>,
    },
    /// Stroke-font label, centered on the origin.
    Numeral {
        text: String,
        size: Real,
    },
}

impl ProfileShape {
    pub fn build<S: Clone + Send + Sync + Debug>(&self, metadata: Option<S>) -> Profile<S> {
        match self {
            ProfileShape::Circle { radius } => Profile::circle(*radius, CIRCLE_SEGMENTS, metadata),
            ProfileShape::Ring {
                outer_radius,
                inner_radius,
            } => Profile::ring(*outer_radius, *inner_radius, CIRCLE_SEGMENTS, metadata),
            ProfileShape::Rectangle { width, height } => {
                Profile::rectangle(*width, *height, metadata)
            },
            ProfileShape::Trapezoid {
                top_width,
                bottom_width,
                length,
                cutout,
            } => Profile::trapezoid(*top_width, *bottom_width, *length, metadata)
                .with_scaled_hole(*cutout),
            ProfileShape::Crescent { radius } => Profile::crescent(*radius, metadata),
            ProfileShape::Mirrored { points, cutout } => {
                Profile::mirrored(points, cutout.as_deref(), metadata)
            },
            ProfileShape::Numeral { text, size } => Profile::numeral(text, *size, metadata),
        }
    }
}

impl<S: Clone + Send + Sync + Debug> Profile<S> {
    /// Circle of `radius` approximated by `segments` points, starting on +X.
    pub fn circle(radius: Real, segments: usize, metadata: Option<S>) -> Self {
        if radius <= tolerance() || segments < 3 {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        Profile::from_ring(&circle_points(radius, segments), metadata)
    }

    /// Annulus between `inner_radius` and `outer_radius`.
    pub fn ring(outer_radius: Real, inner_radius: Real, segments: usize, metadata: Option<S>) -> Self {
        if inner_radius <= tolerance() {
            return Profile::circle(outer_radius, segments, metadata);
        }
        if inner_radius >= outer_radius || segments < 3 {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        let polygon = GeoPolygon::new(
            LineString::new(dedup_ring(&circle_points(outer_radius, segments))),
            vec![LineString::new(dedup_ring(&circle_points(inner_radius, segments)))],
        );
        Profile::from_polygons(vec![polygon], metadata)
    }

    /// Axis-aligned rectangle centered on the origin.
    pub fn rectangle(width: Real, height: Real, metadata: Option<S>) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Profile::from_ring(&[[-hw, -hh], [hw, -hh], [hw, hh], [-hw, hh]], metadata)
    }

    /// Rectangle of `width` x `height` with a concentric rectangular opening
    /// inset by `frame_width` on every side.
    pub fn rectangle_frame(width: Real, height: Real, frame_width: Real, metadata: Option<S>) -> Self {
        let inner = Profile::rectangle(width - 2.0 * frame_width, height - 2.0 * frame_width, None);
        let outer = Profile::rectangle(width, height, metadata);
        if inner.is_empty() || frame_width <= tolerance() {
            return outer;
        }
        outer.punch(&inner.with_metadata(outer.metadata.clone()))
    }

    /// Trapezoid centered on the origin with its length along +Y;
    /// `top_width` at `y = +length/2`. A zero width gives a triangle.
    pub fn trapezoid(top_width: Real, bottom_width: Real, length: Real, metadata: Option<S>) -> Self {
        let (ht, hb, hl) = (top_width / 2.0, bottom_width / 2.0, length / 2.0);
        Profile::from_ring(&[[-hb, -hl], [hb, -hl], [ht, hl], [-ht, hl]], metadata)
    }

    /// Punch a copy of each exterior scaled by `factor` about the origin.
    /// Factors outside `(0, 1)` leave the profile untouched.
    pub fn with_scaled_hole(self, factor: Real) -> Self {
        if factor <= 0.0 || factor >= 1.0 {
            return self;
        }
        let holes = self.scale(factor, factor, 1.0);
        self.punch(&holes)
    }

    /// Moon-phase window: three cubic Beziers across the top joined by a
    /// lower semicircle of `radius`.
    pub fn crescent(radius: Real, metadata: Option<S>) -> Self {
        if radius <= tolerance() {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        let r = radius;
        let curves: [[[Real; 2]; 4]; 3] = [
            [[-r, 0.0], [-r, 0.35 * r], [-0.55 * r, 0.45 * r], [-0.35 * r, 0.2 * r]],
            [[-0.35 * r, 0.2 * r], [-0.15 * r, 0.0], [0.15 * r, 0.0], [0.35 * r, 0.2 * r]],
            [[0.35 * r, 0.2 * r], [0.55 * r, 0.45 * r], [r, 0.35 * r], [r, 0.0]],
        ];

        let mut points = vec![[-r, 0.0]];
        for curve in &curves {
            points.extend((1..=BEZIER_SEGMENTS).map(|i| {
                cubic_bezier(curve, i as Real / BEZIER_SEGMENTS as Real)
            }));
        }
        points.extend((1..CRESCENT_ARC_SEGMENTS).map(|i| {
            let angle = -PI * i as Real / CRESCENT_ARC_SEGMENTS as Real;
            [r * angle.cos(), r * angle.sin()]
        }));
        Profile::from_ring(&points, metadata)
    }

    /// Mirror a half outline about the Y axis, optionally notched by a
    /// second mirrored half outline.
    ///
    /// A half outline with fewer than two points, or one enclosing no area,
    /// gives an empty profile. A cutout with fewer than two points is
    /// ignored.
    pub fn mirrored(points: &[[Real; 2]], cutout: Option<&[[Real; 2]]>, metadata: Option<S>) -> Self {
        let outline = mirror_outline(points);
        if outline.points.len() < 4 {
            tracing::trace!(points = points.len(), "half outline too short, nothing to mirror");
            return Profile::from_polygons(Vec::new(), metadata);
        }
        let outer_area = GeoPolygon::new(LineString::new(dedup_ring(&outline.points)), vec![])
            .unsigned_area();
        if outer_area <= tolerance() {
            return Profile::from_polygons(Vec::new(), metadata);
        }

        let notch = cutout.map(mirror_outline).filter(|c| c.points.len() >= 4);
        let ring = match notch {
            Some(notch) => {
                // keyhole: outer outline, then the notch in reverse, bridged along the axis
                let mut ring = outline.points;
                ring.extend(notch.points.iter().rev());
                ring
            },
            None => outline.points,
        };
        Profile::from_ring(&ring, metadata)
    }

    /// Right half of a mirrored outline, closed along the Y axis.
    pub fn half(points: &[[Real; 2]], metadata: Option<S>) -> Self {
        if points.len() < 2 {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        Profile::from_ring(&with_axis_endpoints(points), metadata)
    }

    /// Polygon through `points` in order.
    pub fn polygon(points: &[[Real; 2]], metadata: Option<S>) -> Self {
        Profile::from_ring(points, metadata)
    }

    /// Replace the metadata carried by the profile.
    pub fn with_metadata(mut self, metadata: Option<S>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Result of mirroring a half outline: the closed outline plus, for each
/// generated vertex, the index of the input point it came from (`None` for
/// injected axis points).
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredOutline {
    pub points: Vec<[Real; 2]>,
    pub source: Vec<Option<usize>>,
}

/// Mirror a half outline about the Y axis.
///
/// When the first or last point is off the axis, `(0, y)` is injected at
/// that end. With `m` points after injection the outline is the `m` points
/// followed by their mirror images in reverse, `2m` vertices in all.
pub fn mirror_outline(points: &[[Real; 2]]) -> MirroredOutline {
    if points.len() < 2 {
        return MirroredOutline {
            points: Vec::new(),
            source: Vec::new(),
        };
    }
    let mut half: Vec<([Real; 2], Option<usize>)> =
        points.iter().enumerate().map(|(i, p)| (*p, Some(i))).collect();
    let first = points[0];
    let last = points[points.len() - 1];
    if first[0] != 0.0 {
        half.insert(0, ([0.0, first[1]], None));
    }
    if last[0] != 0.0 {
        half.push(([0.0, last[1]], None));
    }

    let mirrored = half.iter().rev().map(|&([x, y], src)| ([-x, y], src));
    let (points, source) = half.iter().copied().chain(mirrored).unzip();
    MirroredOutline { points, source }
}

fn with_axis_endpoints(points: &[[Real; 2]]) -> Vec<[Real; 2]> {
    let mut half = points.to_vec();
    if let Some(&[x, y]) = points.first() {
        if x != 0.0 {
            half.insert(0, [0.0, y]);
        }
    }
    if let Some(&[x, y]) = points.last() {
        if x != 0.0 {
            half.push([0.0, y]);
        }
    }
    half
}

fn circle_points(radius: Real, segments: usize) -> Vec<[Real; 2]> {
    (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            [radius * theta.cos(), radius * theta.sin()]
        })
        .collect()
}

/// De Casteljau evaluation of a cubic Bezier.
fn cubic_bezier(control: &[[Real; 2]; 4], t: Real) -> [Real; 2] {
    let mut pts = *control;
    for level in (1..4).rev() {
        for i in 0..level {
            pts[i] = [
                (1.0 - t) * pts[i][0] + t * pts[i + 1][0],
                (1.0 - t) * pts[i][1] + t * pts[i + 1][1],
            ];
        }
    }
    pts[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_injects_axis_points() {
        let out = mirror_outline(&[[0.5, -1.0], [0.3, 8.0]]);
        // two injected, four per side
        assert_eq!(out.points.len(), 8);
        assert_eq!(out.points[0], [0.0, -1.0]);
        assert_eq!(out.points[3], [0.0, 8.0]);
        assert_eq!(out.points[5], [-0.3, 8.0]);
        assert_eq!(out.source[0], None);
        assert_eq!(out.source[1], Some(0));
        assert_eq!(out.source[6], Some(0));
    }

    #[test]
    fn mirror_keeps_axis_endpoints() {
        let out = mirror_outline(&[[0.0, 0.0], [1.0, 2.0], [0.0, 4.0]]);
        assert_eq!(out.points.len(), 6);
        assert!(out.source.iter().all(Option::is_some));
    }

    #[test]
    fn mirrored_profile_is_symmetric() {
        let p: Profile<()> = Profile::mirrored(&[[0.4, -1.0], [0.3, 6.0]], None, None);
        let bb = p.bounding_box();
        assert!((bb.mins.x + bb.maxs.x).abs() < 1e-12);
        assert!((bb.mins.y + 1.0).abs() < 1e-12);
        assert!((bb.maxs.y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn notch_removes_area() {
        let outer = [[0.5, 0.0], [0.5, 6.0]];
        let plain: Profile<()> = Profile::mirrored(&outer, None, None);
        let notched: Profile<()> = Profile::mirrored(&outer, Some(&[[0.2, 2.0], [0.2, 4.0]]), None);
        assert!((plain.area() - 6.0).abs() < 1e-9);
        assert!((notched.area() - 5.2).abs() < 1e-9);
    }

    #[test]
    fn short_cutout_is_ignored() {
        let outer = [[0.5, 0.0], [0.5, 6.0]];
        let plain: Profile<()> = Profile::mirrored(&outer, None, None);
        let single: Profile<()> = Profile::mirrored(&outer, Some(&[[0.2, 2.0]]), None);
        assert!((plain.area() - single.area()).abs() < 1e-12);
    }

    #[test]
    fn trapezoid_cutout_scales_area() {
        let solid: Profile<()> = Profile::trapezoid(1.2, 0.8, 3.0, None);
        let cut = solid.clone().with_scaled_hole(0.5);
        assert!((solid.area() - 3.0).abs() < 1e-9);
        assert!((cut.area() - 3.0 * 0.75).abs() < 1e-9);
    }

    #[test]
    fn zero_bottom_width_is_a_triangle() {
        let t: Profile<()> = Profile::trapezoid(1.0, 0.0, 2.0, None);
        assert_eq!(t.rings()[0].0.len(), 3);
    }

    #[test]
    fn crescent_spans_its_radius() {
        let c: Profile<()> = Profile::crescent(2.5, None);
        let bb = c.bounding_box();
        assert!((bb.mins.x + 2.5).abs() < 1e-9);
        assert!((bb.maxs.x - 2.5).abs() < 1e-9);
        assert!((bb.mins.y + 2.5).abs() < 1e-6);
        assert!(bb.maxs.y < 2.5 * 0.45);
        assert!(!c.triangulate().is_empty());
    }

    #[test]
    fn small_circles_are_smooth() {
        let marker: Profile<()> = ProfileShape::Circle { radius: 0.8 }.build(None);
        assert_eq!(marker.rings()[0].0.len(), CIRCLE_SEGMENTS);
    }

    #[test]
    fn ring_has_one_hole() {
        let r: Profile<()> = Profile::ring(2.0, 1.0, 32, None);
        assert_eq!(r.rings()[0].1.len(), 1);
        let disc: Profile<()> = Profile::ring(2.0, 0.0, 32, None);
        assert!(disc.rings()[0].1.is_empty());
    }

    #[test]
    fn bezier_endpoints() {
        let c = [[0.0, 0.0], [1.0, 2.0], [3.0, 2.0], [4.0, 0.0]];
        assert_eq!(cubic_bezier(&c, 0.0), [0.0, 0.0]);
        assert_eq!(cubic_bezier(&c, 1.0), [4.0, 0.0]);
    }
}

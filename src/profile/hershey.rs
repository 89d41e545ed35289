//! Stroke text for hour labels, minute track numbers and primitive labels.
//!
//! Glyphs come from the Hershey `futural` font. Each pen stroke is
//! thickened into quads and the quads are unioned, so a label is a clean
//! set of polygons that extrudes like any other profile.

use crate::float_types::{Real, tolerance};
use crate::profile::Profile;
use crate::traits::TransformOps;
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use hershey::{Font, Glyph, Vector};
use nalgebra::{Point2, Vector2};
use std::fmt::Debug;

/// Hershey units from the top of a capital or digit to the baseline.
const CAP_HEIGHT: Real = 21.0;
/// Pen width as a fraction of the font size.
const STROKE: Real = 0.1;
/// Advance, in Hershey units, of a character the font has no glyph for.
const MISSING_ADVANCE: Real = 16.0;

fn font() -> &'static Font {
    &hershey::fonts::FUTURAL
}

fn advance(font: &Font, ch: char) -> Real {
    match font.glyph(ch) {
        Ok(glyph) => glyph.max_x as Real - glyph.min_x as Real,
        Err(_) => MISSING_ADVANCE,
    }
}

/// Total advance of `text` at `size`.
pub fn text_width(text: &str, size: Real) -> Real {
    let font = font();
    text.chars().map(|ch| advance(font, ch)).sum::<Real>() * size / CAP_HEIGHT
}

/// Horizontal start that centers `text` on the origin; longer labels start
/// further left.
pub fn centering_offset(text: &str, size: Real) -> Real {
    -text_width(text, size) / 2.0
}

/// Pen strokes of `glyph` as polylines, scaled and moved so the glyph's left
/// edge sits at `left`. Hershey y grows downward; the result is y-up.
fn glyph_strokes(glyph: &Glyph, scale: Real, left: Real) -> Vec<Vec<Point2<Real>>> {
    let min_x = glyph.min_x as Real;
    let to_point = |x: Real, y: Real| Point2::new(left + (x - min_x) * scale, -y * scale);

    let mut strokes = Vec::new();
    let mut current: Vec<Point2<Real>> = Vec::new();
    for vector in &glyph.vectors {
        match vector {
            Vector::MoveTo { x, y } => {
                if current.len() > 1 {
                    strokes.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(to_point(*x as Real, *y as Real));
            },
            Vector::LineTo { x, y } => current.push(to_point(*x as Real, *y as Real)),
        }
    }
    if current.len() > 1 {
        strokes.push(current);
    }
    strokes
}

/// Rectangle of half width `half` around segment `a -> b`, extended by
/// `half` past both ends so neighbouring segments overlap at the joints.
fn stroke_quad(a: Point2<Real>, b: Point2<Real>, half: Real) -> GeoPolygon<Real> {
    let d = b - a;
    let along = if d.norm() > tolerance() {
        d.normalize() * half
    } else {
        Vector2::new(half, 0.0)
    };
    let across = Vector2::new(-along.y, along.x);
    let corners = [a - along - across, b + along - across, b + along + across, a - along + across];
    let ring: Vec<Coord<Real>> = corners.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    GeoPolygon::new(LineString::new(ring), vec![])
}

impl<S: Clone + Send + Sync + Debug> Profile<S> {
    /// `text` in the Hershey stroke font, digits and capitals `size` tall,
    /// centered on the origin. Characters the font lacks leave a gap.
    pub fn numeral(text: &str, size: Real, metadata: Option<S>) -> Self {
        if size <= 0.0 || !size.is_finite() {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        let font = font();
        let scale = size / CAP_HEIGHT;
        let half = STROKE * size / 2.0;

        let mut ink = MultiPolygon::<Real>::new(Vec::new());
        let mut cursor = centering_offset(text, size);
        for ch in text.chars() {
            let Ok(glyph) = font.glyph(ch) else {
                tracing::trace!(%ch, "no glyph for character, skipped");
                cursor += MISSING_ADVANCE * scale;
                continue;
            };
            let quads = glyph_strokes(&glyph, scale, cursor)
                .iter()
                .flat_map(|line| line.windows(2).map(move |w| stroke_quad(w[0], w[1], half)))
                .collect::<Vec<_>>();
            for quad in quads {
                ink = ink.union(&MultiPolygon::new(vec![quad]));
            }
            cursor += advance(font, ch) * scale;
        }

        let profile = Profile::from_polygons(ink.0, metadata);
        if profile.is_empty() {
            return profile;
        }
        let bb = profile.bounding_box();
        profile.translate(0.0, -(bb.mins.y + bb.maxs.y) / 2.0, 0.0)
    }
}

//! Path geometry for the mock-up outlines.
//!
//! The rounded rectangle is built once as a list of [`PathSegment`]s and then
//! replayed onto Cairo, either to fill the bezel or to clip the screenshot.

use crate::util::Rect;
use std::f64::consts::{FRAC_PI_2, PI};

/// One segment of a closed outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new sub-path at (x, y)
    MoveTo { x: f64, y: f64 },
    /// Straight edge to (x, y)
    LineTo { x: f64, y: f64 },
    /// Clockwise circular arc around (cx, cy), angles in radians
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    /// Close the current sub-path
    Close,
}

/// Builds the outline of a rectangle with four rounded corners.
///
/// Starts at the top edge and runs clockwise: top edge, top-right arc, right
/// edge, bottom-right arc, bottom edge, bottom-left arc, left edge, top-left
/// arc. A radius above half the shorter side is kept as given, so the arcs
/// overlap and the outline bulges toward a pill.
pub fn rounded_rect(rect: Rect, radius: f64) -> Vec<PathSegment> {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    let r = radius.max(0.0);

    vec![
        PathSegment::MoveTo { x: x + r, y },
        PathSegment::LineTo { x: x + w - r, y },
        PathSegment::Arc {
            cx: x + w - r,
            cy: y + r,
            radius: r,
            start: -FRAC_PI_2,
            end: 0.0,
        },
        PathSegment::LineTo {
            x: x + w,
            y: y + h - r,
        },
        PathSegment::Arc {
            cx: x + w - r,
            cy: y + h - r,
            radius: r,
            start: 0.0,
            end: FRAC_PI_2,
        },
        PathSegment::LineTo { x: x + r, y: y + h },
        PathSegment::Arc {
            cx: x + r,
            cy: y + h - r,
            radius: r,
            start: FRAC_PI_2,
            end: PI,
        },
        PathSegment::LineTo { x, y: y + r },
        PathSegment::Arc {
            cx: x + r,
            cy: y + r,
            radius: r,
            start: PI,
            end: PI + FRAC_PI_2,
        },
        PathSegment::Close,
    ]
}

/// Appends the segments to the current Cairo path.
///
/// Starts a fresh path first, so the caller only has to fill or clip.
pub fn append_path(ctx: &cairo::Context, segments: &[PathSegment]) {
    ctx.new_path();
    for segment in segments {
        match *segment {
            PathSegment::MoveTo { x, y } => ctx.move_to(x, y),
            PathSegment::LineTo { x, y } => ctx.line_to(x, y),
            PathSegment::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => {
                // Zero-radius arcs collapse into the corner point.
                if radius > 0.0 {
                    ctx.arc(cx, cy, radius, start, end);
                } else {
                    ctx.line_to(cx, cy);
                }
            }
            PathSegment::Close => ctx.close_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcs(segments: &[PathSegment]) -> Vec<(f64, f64, f64)> {
        segments
            .iter()
            .filter_map(|segment| match *segment {
                PathSegment::Arc { cx, cy, radius, .. } => Some((cx, cy, radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn outline_starts_on_top_edge_and_closes() {
        let path = rounded_rect(Rect::new(10.0, 20.0, 100.0, 60.0), 8.0);
        assert_eq!(path.first(), Some(&PathSegment::MoveTo { x: 18.0, y: 20.0 }));
        assert_eq!(path.last(), Some(&PathSegment::Close));
        assert_eq!(path.len(), 10);
    }

    #[test]
    fn arcs_sit_inside_each_corner_clockwise() {
        let path = rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0);
        assert_eq!(
            arcs(&path),
            vec![
                (90.0, 10.0, 10.0),
                (90.0, 40.0, 10.0),
                (10.0, 40.0, 10.0),
                (10.0, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn zero_radius_is_a_plain_rectangle() {
        let path = rounded_rect(Rect::new(0.0, 0.0, 4.0, 2.0), 0.0);
        assert!(arcs(&path).iter().all(|&(_, _, r)| r == 0.0));
        assert_eq!(path[1], PathSegment::LineTo { x: 4.0, y: 0.0 });
    }

    #[test]
    fn oversized_radius_is_not_clamped() {
        let path = rounded_rect(Rect::new(0.0, 0.0, 20.0, 10.0), 50.0);
        assert!(arcs(&path).iter().all(|&(_, _, r)| r == 50.0));
    }

    #[test]
    fn append_path_fills_inside_corners_only() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 40, 40).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        append_path(&ctx, &rounded_rect(Rect::new(0.0, 0.0, 40.0, 40.0), 15.0));
        assert!(ctx.in_fill(20.0, 20.0).unwrap());
        assert!(!ctx.in_fill(1.0, 1.0).unwrap());
    }
}

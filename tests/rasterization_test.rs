//! Rasterization Tests - Concrete Scenarios and Properties
//!
//! Exercises the public API only: plain lines, clamping, thick lines and
//! the simple thick-line variant.
//!
//! Run: cargo test --test rasterization_test

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use bresenham_raster::prelude::*;
use proptest::prelude::*;

const BLANK: u8 = 1;

fn blank(edge: u32) -> Vec<u8> {
    vec![BLANK; (edge * edge) as usize]
}

fn inked(canvas: &[u8], edge: u32) -> BTreeSet<(i32, i32)> {
    let edge = edge as usize;
    canvas
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == INK)
        .map(|(i, _)| ((i % edge) as i32, (i / edge) as i32))
        .collect()
}

fn line(edge: u32, x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<u8> {
    let mut canvas = blank(edge);
    Rasterizer::new(&mut canvas[..], edge).unwrap().draw_line(x0, y0, x1, y1);
    canvas
}

/// Pixels of a Bresenham line in drawing order, recorded through a sink.
struct Trace {
    edge: usize,
    order: Vec<(i32, i32)>,
}

impl PixelSink for Trace {
    fn pixel_capacity(&self) -> usize {
        self.edge * self.edge
    }

    fn mark(&mut self, index: usize) {
        self.order.push(((index % self.edge) as i32, (index / self.edge) as i32));
    }
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn horizontal_line_on_ten_by_ten() {
    let canvas = line(10, 1, 1, 8, 1);
    for (i, &v) in canvas.iter().enumerate() {
        let expected = if (1 + 10..=8 + 10).contains(&i) { INK } else { BLANK };
        assert_eq!(v, expected, "index {i}");
    }
}

#[test]
fn diagonal_line_on_five_by_five() {
    let canvas = line(5, 0, 0, 4, 4);
    let expected: BTreeSet<_> = (0..5).map(|i| (i, i)).collect();
    assert_eq!(inked(&canvas, 5), expected);
}

#[test]
fn out_of_range_line_is_clamped() {
    assert_eq!(line(20, -5, -5, 25, 3), line(20, 0, 0, 19, 3));
}

#[test]
fn thick_vertical_band_centered_on_column() {
    let mut canvas = vec![BLANK; 32 * 32];
    Rasterizer::new(&mut canvas[..], 32)
        .unwrap()
        .draw_thick_line(2, 2, 2, 10, 3, ThicknessMode::Middle);

    let expected: BTreeSet<_> = (2..=10)
        .flat_map(|y| (1..=3).map(move |x| (x, y)))
        .collect();
    assert_eq!(inked(&canvas, 32), expected);
}

#[test]
fn thick_line_thickness_one_matches_line() {
    for mode in ThicknessMode::ALL {
        let mut canvas = blank(24);
        Rasterizer::new(&mut canvas[..], 24)
            .unwrap()
            .draw_thick_line(3, 20, 17, 4, 1, mode);
        assert_eq!(canvas, line(24, 3, 20, 17, 4));
    }
}

#[test]
fn simple_thick_line_thickness_one_matches_line() {
    for mode in ThicknessMode::ALL {
        let mut canvas = blank(24);
        Rasterizer::new(&mut canvas[..], 24)
            .unwrap()
            .draw_thick_line_simple(3, 20, 17, 4, 1, mode);
        assert_eq!(canvas, line(24, 3, 20, 17, 4));
    }
}

#[test]
fn simple_thick_line_keeps_centre_line() {
    let mut exact = blank(32);
    let mut simple = blank(32);
    Rasterizer::new(&mut exact[..], 32)
        .unwrap()
        .draw_thick_line(5, 5, 25, 12, 5, ThicknessMode::Middle);
    Rasterizer::new(&mut simple[..], 32)
        .unwrap()
        .draw_thick_line_simple(5, 5, 25, 12, 5, ThicknessMode::Middle);

    let simple = inked(&simple, 32);
    assert!(simple.len() >= inked(&exact, 32).len());
    assert!(simple.contains(&(5, 5)));
    assert!(simple.contains(&(25, 12)));
}

#[test]
fn thickness_mode_from_configuration() {
    assert_eq!(ThicknessMode::try_from(2).unwrap(), ThicknessMode::Counterclockwise);
    assert!(matches!(
        ThicknessMode::try_from(9),
        Err(Error::InvalidThicknessMode(9))
    ));
    assert_eq!("ccw".parse::<ThicknessMode>().unwrap(), ThicknessMode::Counterclockwise);
}

#[test]
fn rasterizer_rejects_short_canvas() {
    let mut canvas = vec![BLANK; 99];
    assert!(matches!(
        Rasterizer::new(&mut canvas[..], 10),
        Err(Error::CanvasTooSmall { len: 99, required: 100 })
    ));
}

#[test]
fn drawables_compose() {
    let shapes = [
        ThickLine::new(Line::from_coords(0, 0, 15, 0)).with_thickness(2),
        ThickLine::new(Line::from_coords(0, 15, 15, 15)).with_thickness(2),
    ];
    let mut canvas = blank(16);
    shapes[..].draw(&mut Rasterizer::new(&mut canvas[..], 16).unwrap());

    let rows: BTreeSet<_> = inked(&canvas, 16).into_iter().map(|(_, y)| y).collect();
    assert!(rows.contains(&0));
    assert!(rows.contains(&15));
    assert!(!rows.contains(&7));
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Each pixel is 8-adjacent to the one before it, from start to end.
    #[test]
    fn prop_line_is_connected_path(
        x0 in 0i32..48, y0 in 0i32..48, x1 in 0i32..48, y1 in 0i32..48
    ) {
        prop_assume!(x0 != x1 && y0 != y1);
        let mut trace = Trace { edge: 48, order: Vec::new() };
        Rasterizer::new(&mut trace, 48).unwrap().draw_line(x0, y0, x1, y1);

        let start = Point::new(x0, y0);
        let end = Point::new(x1, y1);
        let points: Vec<Point> = trace.order.iter().map(|&p| p.into()).collect();
        prop_assert_eq!(points.first().copied(), Some(start));
        prop_assert_eq!(points.last().copied(), Some(end));
        for pair in points.windows(2) {
            let step = pair[1] - pair[0];
            prop_assert_eq!(step.x.abs().max(step.y.abs()), 1);
        }
    }

    /// Axis-aligned lines are the filled rectangle between their endpoints.
    #[test]
    fn prop_axis_aligned_is_rectangle(
        fixed in 0i32..40, a in 0i32..40, b in 0i32..40, vertical in any::<bool>()
    ) {
        let canvas = if vertical {
            line(40, fixed, a, fixed, b)
        } else {
            line(40, a, fixed, b, fixed)
        };
        let span = a.min(b)..=a.max(b);
        let expected: BTreeSet<_> = span
            .map(|v| if vertical { (fixed, v) } else { (v, fixed) })
            .collect();
        prop_assert_eq!(inked(&canvas, 40), expected);
    }

    /// A coordinate outside the canvas behaves like the nearest border value.
    #[test]
    fn prop_clamping(
        x0 in -100i32..140, y0 in -100i32..140, x1 in -100i32..140, y1 in -100i32..140
    ) {
        let c = |v: i32| v.clamp(0, 39);
        prop_assert_eq!(line(40, x0, y0, x1, y1), line(40, c(x0), c(y0), c(x1), c(y1)));
    }

    /// Thick lines on arbitrary input never write outside the canvas.
    #[test]
    fn prop_thick_lines_stay_in_bounds(
        x0 in -200i32..200, y0 in -200i32..200, x1 in -200i32..200, y1 in -200i32..200,
        thickness in -2i32..12, simple in any::<bool>()
    ) {
        let mut canvas = blank(16);
        let mut raster = Rasterizer::new(&mut canvas[..], 16).unwrap();
        for mode in ThicknessMode::ALL {
            if simple {
                raster.draw_thick_line_simple(x0, y0, x1, y1, thickness, mode);
            } else {
                raster.draw_thick_line(x0, y0, x1, y1, thickness, mode);
            }
        }
        prop_assert!(canvas.iter().all(|&v| v == INK || v == BLANK));
    }
}

//! Frame-fill patterns end to end: coverage, rotation and determinism.

use std::f64::consts::SQRT_2;

use penframe::geometry::{BorderRegion, Rect, Segment, clip_segment};
use penframe::pattern::{Chevron, DiagonalStripe, PatternFamily, PatternPrimitive, PatternSpec, PatternUpdate, Refresh};
use penframe::types::{Angle, Mm};
use penframe::{PageSize, coverage_size};

fn square_page(family: PatternFamily, rotation: Angle) -> PatternSpec {
    PatternSpec::new(family, Mm(100.0), Mm(100.0))
        .with_margin(Mm(20.0))
        .with_spacing(Mm(5.0))
        .with_rotation(rotation)
}

#[test]
fn clipping_matches_the_reference_cases() {
    let rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        clip_segment(Segment::from_coords(-10.0, 5.0, 5.0, 5.0), &rect),
        Some(Segment::from_coords(0.0, 5.0, 5.0, 5.0))
    );
    assert_eq!(clip_segment(Segment::from_coords(-10.0, -10.0, -5.0, -5.0), &rect), None);
    let inside = Segment::from_coords(2.0, 3.0, 8.0, 7.0);
    assert_eq!(clip_segment(inside, &rect), Some(inside));
}

#[test]
fn frame_strips_tile_the_border() {
    let frame = BorderRegion::new(200.0, 200.0, 20.0);
    let strips = frame.strips();
    let overlap: f64 = strips
        .iter()
        .enumerate()
        .flat_map(|(i, a)| strips[i + 1..].iter().map(move |b| a.overlap_area(b)))
        .sum();
    assert_eq!(overlap, 0.0);
    assert_eq!(strips.iter().map(Rect::area).sum::<f64>(), 200.0 * 200.0 - 160.0 * 160.0);
}

#[test]
fn rotated_stripes_still_cover_the_frame() {
    let size = coverage_size(100.0, 100.0, Angle(45.0));
    assert!(size.x >= 100.0 * SQRT_2 - 1e-9 && size.y >= 100.0 * SQRT_2 - 1e-9);

    let group = square_page(DiagonalStripe.into(), Angle(45.0)).generate();
    assert!(!group.is_empty());
    let extent = group.extent().expect("rotated group has an extent");
    // The frame spans the whole 300 px page.
    assert!(extent.left <= 0.0 && extent.top <= 0.0);
    assert!(extent.right() >= 300.0 && extent.bottom() >= 300.0);
}

#[test]
fn safe_area_clip_keeps_rotated_output_on_the_paper() {
    let page = PageSize::custom(Mm(100.0), Mm(100.0));
    let group = square_page(DiagonalStripe.into(), Angle(45.0)).generate();
    let extent = group.extent().expect("rotated group has an extent");
    assert!(extent.left < 0.0 && extent.right() > 300.0);

    let safe = page.default_safe_area(&group.scaler);
    let plotted = group.clip_to_safe_area(&safe);
    assert!(!plotted.is_empty());
    for primitive in plotted {
        let PatternPrimitive::Line(s) = primitive else { panic!("stripes plot as lines, got {primitive:?}") };
        assert!(safe.contains(s.start) && safe.contains(s.end), "{s:?} leaves the safe area");
    }
}

#[test]
fn regeneration_is_deterministic() {
    for name in PatternFamily::NAMES {
        let family: PatternFamily = name.parse().expect("known family");
        let spec = square_page(family, Angle(30.0));
        let (a, b) = (spec.generate(), spec.generate());
        assert_eq!(a.len(), b.len(), "{name}");
        assert_eq!(a.primitives, b.primitives, "{name}");
    }
}

#[test]
fn every_family_stays_inside_the_frame() {
    let page = PageSize::custom(Mm(100.0), Mm(100.0));
    for name in PatternFamily::NAMES {
        let family: PatternFamily = name.parse().expect("known family");
        let group = PatternSpec::for_page(family, page).with_spacing(Mm(7.0)).generate();
        let frame = BorderRegion::new(300.0, 300.0, 60.0);
        for primitive in &group.primitives {
            let probe = match *primitive {
                PatternPrimitive::Line(s) => s.at(0.5),
                PatternPrimitive::Dot { center, .. } => center,
                PatternPrimitive::Square { origin, size } => origin + glam::DVec2::splat(size / 2.0),
            };
            assert!(frame.contains_point(probe), "{name}: {primitive:?} strays into the interior");
        }
    }
}

#[test]
fn degenerate_page_yields_nothing() {
    let group = PatternSpec::new(DiagonalStripe.into(), Mm(0.0), Mm(100.0)).generate();
    assert!(group.is_empty());
    assert_eq!(group.extent(), None);
}

#[test]
fn chevron_gap_edit_regenerates() {
    let mut group = square_page(Chevron::default().into(), Angle::ZERO).generate();
    let closed = group.len();
    assert_eq!(group.apply(PatternUpdate::Family(Chevron { gap: Mm(1.0) }.into())), Refresh::Regenerate);
    assert_eq!(group.spec.family, PatternFamily::Chevron(Chevron { gap: Mm(1.0) }));
    // Withholding the vertex never adds arms.
    assert!(group.len() <= closed);
    assert_ne!(group.primitives, square_page(Chevron::default().into(), Angle::ZERO).generate().primitives);
}

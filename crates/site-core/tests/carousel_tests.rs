// Host-side tests for the looping features carousel.

use site_core::{
    content::feature_cards, CardContent, CarouselConfig, CarouselPhase, InfiniteCarousel,
    SiteError,
};

fn cards(n: usize) -> Vec<CardContent> {
    (0..n)
        .map(|i| CardContent::new(&format!("card {i}"), "", "*"))
        .collect()
}

/// Carousel of `n` items whose slides measure `slide_width` px each.
fn measured(n: usize, slide_width: f32) -> InfiniteCarousel {
    let mut c = InfiniteCarousel::new(cards(n), CarouselConfig::default()).unwrap();
    c.measure(slide_width * 3.0 * n as f32);
    c
}

fn in_band(c: &InfiniteCarousel) -> bool {
    let cycle = c.cycle_width();
    let eps = 1e-3;
    c.offset() >= -2.0 * cycle - eps && c.offset() <= -cycle + eps
}

#[test]
fn rejects_empty_items_and_bad_config() {
    assert_eq!(
        InfiniteCarousel::new(Vec::new(), CarouselConfig::default()).unwrap_err(),
        SiteError::EmptyItems
    );
    assert!(InfiniteCarousel::new(cards(3), CarouselConfig::default().with_snap_group(0)).is_err());
    assert!(
        InfiniteCarousel::new(cards(3), CarouselConfig::default().with_loop_duration(0.0)).is_err()
    );
}

#[test]
fn measure_places_offset_at_start_of_middle_copy() {
    for n in 1..=9 {
        for w in [1.0_f32, 37.5, 100.0, 200.0, 333.0] {
            let c = measured(n, w);
            assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
            assert!((c.slide_width() - w).abs() < 1e-3);
            assert!((c.offset() + n as f32 * w).abs() < 1e-2);
            assert!(in_band(&c), "n={n} w={w} offset={}", c.offset());
        }
    }
}

#[test]
fn zero_measurement_defers_initialization() {
    let mut c = InfiniteCarousel::new(cards(6), CarouselConfig::default()).unwrap();
    c.measure(0.0);
    c.measure(f32::NAN);
    assert_eq!(c.phase(), CarouselPhase::Uninitialized);
    assert!(!c.is_measured());
    assert_eq!(c.visual_index(), None);

    // everything before measurement is a no-op and stays finite
    c.on_drag_start();
    c.on_drag_move(120.0);
    c.on_drag_end();
    c.tick(1.0);
    assert_eq!(c.offset(), 0.0);
    assert_eq!(c.snap_point(-650.0), -650.0);

    c.measure(3600.0);
    assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
    assert_eq!(c.offset(), -1200.0);
}

#[test]
fn snap_rounds_to_nearest_group_boundary() {
    let c = measured(8, 100.0);
    assert_eq!(c.snap_point(-650.0), -800.0);
    assert_eq!(c.snap_point(-550.0), -400.0);
    // exact tie rounds toward positive infinity
    assert_eq!(c.snap_point(-600.0), -400.0);
}

#[test]
fn drag_to_minus_650_settles_on_minus_800() {
    let mut c = measured(8, 100.0);
    c.on_drag_start();
    c.on_drag_move(-650.0 - c.offset());
    assert_eq!(c.offset(), -650.0);
    c.on_drag_end();
    // -800 is already inside [-1600, -800]
    assert_eq!(c.offset(), -800.0);
}

#[test]
fn six_items_small_drag_left_settles_in_band() {
    // N=6, slide 200 => cycle 1200, snap step 800
    let mut c = measured(6, 200.0);
    assert_eq!(c.offset(), -1200.0);
    c.on_drag_start();
    for d in [-10.0, -15.0, -5.0, -20.0] {
        c.on_drag_move(d);
    }
    assert_eq!(c.offset(), -1250.0);
    c.on_drag_end();
    // round(-1250 / 800) = -2 => -1600, already inside [-2400, -1200]
    assert_eq!(c.offset(), -1600.0);
    assert!(in_band(&c));
}

#[test]
fn snapped_point_past_either_end_is_pulled_back_by_one_cycle() {
    let c = measured(6, 200.0);
    assert_eq!(c.recenter(-800.0), -2000.0);
    assert_eq!(c.recenter(0.0), -1200.0);
    assert_eq!(c.recenter(-2800.0), -1600.0);
    assert_eq!(c.recenter(-1600.0), -1600.0);
    // far-away drags are brought all the way back
    let far = c.recenter(-12_800.0);
    assert!((-2400.0..=-1200.0).contains(&far));
    assert_eq!((far - -12_800.0).rem_euclid(1200.0), 0.0);
}

#[test]
fn drag_end_is_idempotent() {
    let mut c = measured(6, 200.0);
    c.on_drag_start();
    c.on_drag_move(50.0);
    c.on_drag_end();
    let first = c.offset();
    c.on_drag_end();
    assert_eq!(c.offset(), first);
    assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
}

// Holds when the pre-drag offset is a snap-group boundary shifted by whole
// cycles: the fresh -N*w start, or any snapped offset when N is a multiple of
// the snap group. Otherwise the snap grid and cycle grid disagree.
#[test]
fn dragging_one_full_cycle_shows_the_same_card() {
    for n in [1usize, 4, 6, 8] {
        let mut c = measured(n, 150.0);
        let before = c.visual_index();
        let cycle = c.cycle_width();
        c.on_drag_start();
        c.on_drag_move(cycle * 0.25);
        c.on_drag_move(cycle * 0.75);
        c.on_drag_end();
        assert_eq!(c.visual_index(), before, "n={n}");
        assert!(in_band(&c));
    }
}

#[test]
fn drag_is_unconstrained_until_release() {
    let mut c = measured(6, 200.0);
    c.on_drag_start();
    c.on_drag_move(5000.0);
    assert_eq!(c.offset(), 3800.0);
    assert!(c.is_dragging());
    c.on_drag_end();
    assert!(in_band(&c));
}

#[test]
fn ticks_do_not_move_the_strip_while_dragging() {
    let mut c = measured(6, 200.0);
    c.tick(1.0);
    c.on_drag_start();
    let frozen = c.offset();
    c.tick(3.0);
    c.tick(0.5);
    assert_eq!(c.offset(), frozen);
}

#[test]
fn autoplay_covers_one_cycle_per_loop_duration() {
    let mut c = measured(6, 200.0);
    // 20 s per 1200 px => 60 px/s
    c.tick(5.0);
    assert!((c.offset() - -1500.0).abs() < 1e-2, "offset={}", c.offset());
    c.tick(5.0);
    assert!((c.offset() - -1800.0).abs() < 1e-2);
    for _ in 0..600 {
        c.tick(1.0 / 60.0);
        assert!(in_band(&c), "offset={}", c.offset());
    }
}

#[test]
fn autoplay_resumes_from_the_settled_offset() {
    let mut c = measured(6, 200.0);
    c.tick(3.0);
    c.on_drag_start();
    c.on_drag_move(-140.0);
    c.on_drag_end();
    let settled = c.offset();
    c.tick(1.0 / 60.0);
    // one frame of auto-play moves one frame's worth of pixels, no jump
    let step = (c.offset() - settled).abs();
    assert!(step < 1.5, "jumped {step}px");
}

#[test]
fn resize_keeps_the_same_card_in_view() {
    let mut c = measured(6, 200.0);
    c.tick(7.0);
    let before = c.visual_index();
    c.measure(6.0 * 3.0 * 300.0);
    assert_eq!(c.slide_width(), 300.0);
    assert_eq!(c.visual_index(), before);
    assert!(in_band(&c));
}

#[test]
fn strip_repeats_items_three_times() {
    let items = feature_cards();
    let c = InfiniteCarousel::new(items.clone(), CarouselConfig::default()).unwrap();
    assert_eq!(c.slide_count(), 18);
    let titles: Vec<&str> = c.slides().map(|(_, card)| card.title.as_str()).collect();
    assert_eq!(titles.len(), 18);
    assert_eq!(titles[0], titles[6]);
    assert_eq!(titles[5], titles[17]);
    assert_eq!(titles[0], items[0].title);
}

#[test]
fn full_cycle_drag_after_a_snap_keeps_the_card_when_groups_tile_the_cycle() {
    for n in [4usize, 8] {
        let mut c = measured(n, 120.0);
        c.on_drag_start();
        c.on_drag_move(-310.0);
        c.on_drag_end();
        let before = c.visual_index();
        let cycle = c.cycle_width();
        c.on_drag_start();
        c.on_drag_move(cycle);
        c.on_drag_end();
        assert_eq!(c.visual_index(), before, "n={n}");
        assert!(in_band(&c));
    }
}

use crate::*;

use carousel::{CarouselOptions, Direction, Measurement};

fn five_card_measurement() -> Measurement {
    Measurement {
        viewport_width: 600.0,
        item_width: 200.0,
        gap: 20.0,
        scroll_width: 8.0 * 220.0,
    }
}

fn mounted() -> Controller {
    let mut c = Controller::new(CarouselOptions::new(5));
    assert_eq!(c.on_measure(five_card_measurement()), Some(900.0));
    c
}

// Ticks at ~60fps until the smooth scroll settles; returns the final clock value.
fn run_until_idle(c: &mut Controller, mut now_ms: u64) -> u64 {
    for _ in 0..200 {
        now_ms += 16;
        c.tick(now_ms);
        if !c.is_animating() {
            return now_ms;
        }
    }
    panic!("animation never settled");
}

#[test]
fn tween_lands_exactly_on_target() {
    let t = Tween::new(10.0, 230.3, 100, 300, Easing::EaseInOutCubic);
    assert_eq!(t.sample(100), 10.0);
    assert_eq!(t.sample(400), 230.3);
    assert_eq!(t.sample(10_000), 230.3);
    assert!(t.is_done(400));
    assert!(!t.is_done(399));

    let mut last = t.sample(100);
    for now_ms in (100..=400).step_by(10) {
        let off = t.sample(now_ms);
        assert!(off >= last);
        last = off;
    }
}

#[test]
fn tween_retarget_continues_from_current_sample() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.to, 0.0);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(100), 25.0);
}

#[test]
fn tween_never_samples_negative_offsets() {
    let t = Tween::new(5.0, 0.0, 0, 10, Easing::EaseInOutCubic);
    for now_ms in 0..=10 {
        assert!(t.sample(now_ms) >= 0.0);
    }
}

#[test]
fn tick_without_animation_is_idle() {
    let mut c = mounted();
    assert_eq!(c.tick(16), None);
    assert_eq!(c.offset(), 900.0);
}

#[test]
fn scroll_right_animates_one_card() {
    let mut c = mounted();
    assert_eq!(c.on_scroll(500.0, 0), None);
    c.scroll_right();
    assert!(c.is_animating());

    let mut last = c.offset();
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let off = c.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert_eq!(c.offset(), 720.0);
    // The scroll settled without a wrap.
    assert!(!c.carousel().navigation_pending());
}

#[test]
fn settled_press_leaves_later_drags_organic() {
    let mut c = mounted();
    c.press(Direction::Backward, 0);
    let now_ms = run_until_idle(&mut c, 0);
    assert_eq!(c.offset(), 680.0);
    assert!(!c.carousel().navigation_pending());

    // A drag into the clone region long after the press is organic.
    assert_eq!(c.on_scroll(1100.0, now_ms + 5000), Some(1.0));
    assert!(!c.is_animating());
}

#[test]
fn press_during_animation_continues_from_current_offset() {
    let mut c = Controller::new(CarouselOptions::new(5)).with_animation(100, Easing::Linear);
    c.on_measure(five_card_measurement());
    assert_eq!(c.on_scroll(500.0, 0), None);
    c.press(Direction::Forward, 0);
    assert_eq!(c.tick(50), Some(610.0));

    c.press(Direction::Forward, 50);
    assert_eq!(c.tick(100), Some(720.0));
    assert_eq!(c.tick(150), Some(830.0));
    assert!(!c.is_animating());
}

#[test]
fn first_forward_press_wraps_from_initial_position() {
    // Starting mid-loop at 900, one card forward lands in the clone region.
    let mut c = mounted();
    c.scroll_right();
    run_until_idle(&mut c, 0);
    assert_eq!(c.offset(), 20.0);
}

#[test]
fn button_forward_wraps_to_true_second_item() {
    let mut c = mounted();
    assert_eq!(c.on_scroll(1000.0, 0), None);
    c.scroll_right();

    let mut wrapped = false;
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let off = c.tick(now_ms).unwrap();
        if off < 100.0 {
            wrapped = true;
        }
        assert!(off <= 1160.0);
    }
    assert!(wrapped);
    // item_width + gap - centering_offset
    assert_eq!(c.offset(), 20.0);
    assert!(!c.carousel().navigation_pending());
}

#[test]
fn button_backward_wraps_to_centred_last_item() {
    let mut c = mounted();
    assert_eq!(c.on_scroll(100.0, 0), None);
    c.scroll_left();
    run_until_idle(&mut c, 0);

    // Jumped to content_width (1100) then animated to content_width - centering_offset.
    assert_eq!(c.offset(), 900.0);
    assert!(!c.carousel().navigation_pending());
}

#[test]
fn user_scroll_cancels_animation() {
    let mut c = mounted();
    c.scroll_left();
    assert!(c.is_animating());

    // The user grabs the strip mid-animation.
    assert_eq!(c.on_scroll(1000.0, 16), None);
    assert!(!c.is_animating());
    assert_eq!(c.offset(), 1000.0);
    assert!(!c.carousel().navigation_pending());

    // Dragging on into the clone region wraps organically.
    assert_eq!(c.on_scroll(1100.0, 5000), Some(1.0));
}

#[test]
fn organic_backward_wrap_writes_clone_boundary() {
    let mut c = mounted();
    assert_eq!(c.on_scroll(0.0, 0), Some(1100.0));
    assert!(!c.is_animating());
}

#[test]
fn organic_forward_wrap_writes_one() {
    let mut c = mounted();
    assert_eq!(c.on_scroll(1100.0, 0), Some(1.0));
    // The jump's own scroll event lands inside the cooldown.
    assert_eq!(c.on_scroll(1.0, 5), None);
}

#[test]
fn swipe_starts_smooth_navigation() {
    let mut c = mounted();
    c.on_touch_start(300.0);
    c.on_touch_move(260.0);
    c.on_touch_move(240.0);
    assert!(c.on_touch_end(0));
    run_until_idle(&mut c, 0);
    // Wrapped through the clone region onto the true second item.
    assert_eq!(c.offset(), 20.0);

    c.on_touch_start(300.0);
    c.on_touch_move(330.0);
    assert!(!c.on_touch_end(500));
    assert!(!c.is_animating());
}

#[test]
fn handle_latest_request_wins() {
    let mut c = mounted();
    let mut h = c.handle();
    assert!(h.is_attached());

    h.scroll_right();
    h.scroll_left();
    assert!(!c.is_animating());

    c.tick(0);
    assert!(c.is_animating());
    run_until_idle(&mut c, 0);
    assert_eq!(c.offset(), 680.0);
}

#[test]
fn unmount_detaches_handles() {
    let mut c = mounted();
    let mut h = c.handle();
    c.scroll_right();
    c.unmount();

    assert!(!h.is_attached());
    assert!(!c.is_animating());
    assert!(!c.carousel().navigation_pending());

    h.scroll_right();
    assert_eq!(c.tick(16), None);
    assert!(!c.is_animating());
}

#[test]
fn dropping_the_controller_detaches_handles() {
    let c = mounted();
    let mut h = c.handle();
    drop(c);
    assert!(!h.is_attached());
    h.scroll_left();
}

#[test]
fn hidden_buttons_ignore_presses() {
    let mut c = Controller::new(CarouselOptions::new(5).with_render_navigation(false));
    c.on_measure(five_card_measurement());
    c.press(Direction::Forward, 0);
    assert!(!c.is_animating());

    c.scroll_right();
    assert!(c.is_animating());
}

#[test]
fn custom_animation_settings_apply() {
    let mut c = Controller::new(CarouselOptions::new(5)).with_animation(32, Easing::Linear);
    c.on_measure(five_card_measurement());
    c.scroll_left();
    assert_eq!(c.tick(16), Some(790.0));
    assert_eq!(c.tick(32), Some(680.0));
    assert!(!c.is_animating());
}

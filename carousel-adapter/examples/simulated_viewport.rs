use carousel::{CarouselOptions, Measurement};
use carousel_adapter::{Controller, Easing, Navigate};

fn main() {
    // A frame loop driving the controller without any UI objects. A real adapter would write
    // every returned offset into its scroll container.
    let mut c = Controller::new(CarouselOptions::new(5)).with_animation(240, Easing::SmoothStep);
    let offset = c.on_measure(Measurement {
        viewport_width: 600.0,
        item_width: 200.0,
        gap: 20.0,
        scroll_width: 8.0 * 220.0,
    });
    println!("mounted at {offset:?}");

    // The owning view keeps a handle and presses "forward" twice.
    let mut handle = c.handle();
    let mut now_ms = 0u64;
    for _ in 0..2 {
        handle.scroll_right();
        loop {
            now_ms += 16;
            match c.tick(now_ms) {
                Some(off) => println!("t={now_ms} off={off:.1}"),
                None => break,
            }
            if !c.is_animating() {
                break;
            }
        }
        println!("settled at {}", c.offset());
    }

    // A swipe to the right goes back one card.
    c.on_touch_start(100.0);
    c.on_touch_move(180.0);
    c.on_touch_end(now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("after swipe: {}", c.offset());

    c.unmount();
}

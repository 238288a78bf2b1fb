use carousel::{Carousel, CarouselOptions, Measurement, NodeRect, ScrollCommand, with_clones};

fn main() {
    let cards = ["Card1", "Card2", "Card3", "Card4", "Card5"];
    let mut c = Carousel::new(CarouselOptions::new(cards.len()));

    // The host lays out the strip and reports what it measured.
    let nodes = [NodeRect::new(0.0, 200.0), NodeRect::new(220.0, 200.0)];
    let strip_width = c.slots().len() as f64 * 220.0;
    if let Some(ScrollCommand::Jump(offset)) =
        c.measure(Measurement::from_nodes(600.0, strip_width, &nodes))
    {
        println!("initial offset={offset}");
    }
    println!("geometry={:?}", c.geometry());

    let mut next = 0u64;
    let rendered = with_clones(&cards, c.geometry().illusion_count, || {
        next += 1;
        carousel::CloneId(next)
    });
    for (key, text) in &rendered {
        println!("{key:?} -> {text}");
    }

    // Drag forward until the engine wraps.
    let mut offset = c.scroll_offset();
    for frame in 0..20u64 {
        offset += 40.0;
        if let Some(corr) = c.on_scroll(offset, frame * 16) {
            println!(
                "t={} wrapped {:?}: {offset} -> {}",
                frame * 16,
                corr.boundary,
                corr.jump_to
            );
            offset = corr.jump_to;
        }
    }
}

use tincture::{interpolate, GradientFill, RgbColor, Rgba};

fn main() {
    let stops = [
        Rgba::opaque(RgbColor::RED),
        Rgba::new(0, 255, 0, 128),
        Rgba::TRANSPARENT,
    ];

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        println!("color at {t} = {:?}", interpolate::color_at(t, &stops));
    }

    // Composite the same stops over a light gray, the way a slider paints them.
    let fill = GradientFill::custom(stops.to_vec());
    let row = fill.render(9, RgbColor::rgb(240, 240, 240));
    println!("rendered = {:?}", row);
}

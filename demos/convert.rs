use tincture::{HsvColor, Quantize, RgbColor};

pub fn main() {
    let hsv = HsvColor::new(120, 50, 50).unwrap();

    // (63, 127, 63)
    let truncated = hsv.to_rgb();

    // (64, 128, 64)
    let rounded = hsv.to_rgb_with(Quantize::Round);

    // (120, 50, 49)
    let back = truncated.to_hsv();

    dbg!(truncated, rounded, back);

    for color in [RgbColor::RED, RgbColor::YELLOW, RgbColor::CYAN] {
        println!("{color} -> {}", color.to_hsv());
    }
}

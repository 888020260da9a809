use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_polygon_mut, point::Point};
use log::info;
use tincture::{Axis, Config, Orientation, SliderId, SyncController};

const WIDTH: u32 = 512;
const FILL_HEIGHT: u32 = 24;
const MARKER_HEIGHT: u32 = 8;
const ROW_HEIGHT: u32 = FILL_HEIGHT + MARKER_HEIGHT + 4;
const RING_HEIGHT: u32 = 32;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "out.png".to_string());

    let config = Config::default();
    let backdrop = config.backdrop;
    let mut controller = SyncController::new(config);

    // Dodger blue, slightly translucent.
    if let Some(update) = controller.on_rgb_changed(30, 144, 255, 200)? {
        info!("{} controls changed", update.updates.len());
    }

    let height = SliderId::ALL.len() as u32 * ROW_HEIGHT + RING_HEIGHT;
    let mut img = RgbImage::from_pixel(WIDTH, height, to_pixel(backdrop));

    let axis = Axis::new(WIDTH as i32, Orientation::Horizontal)
        .with_marker_size(controller.config().marker_size);

    for (row, id) in SliderId::ALL.into_iter().enumerate() {
        let slider = controller.slider(id);
        let top = row as u32 * ROW_HEIGHT;

        let colors = slider.fill().render(WIDTH as usize, backdrop);
        for (x, color) in colors.into_iter().enumerate() {
            for y in top..top + FILL_HEIGHT {
                img.put_pixel(x as u32, y, to_pixel(color));
            }
        }

        for &value in slider.track().values() {
            let x = axis.value_to_position(value.into())?;
            draw_marker(&mut img, x, (top + FILL_HEIGHT) as i32);
        }

        info!("{:?} = {}", id, slider.value());
    }

    let ring = controller.wheel().ring_colors();
    let top = SliderId::ALL.len() as u32 * ROW_HEIGHT;
    for x in 0..WIDTH {
        let color = ring[x as usize * ring.len() / WIDTH as usize];
        for y in top..top + RING_HEIGHT {
            img.put_pixel(x, y, to_pixel(color));
        }
    }

    img.save(&out)?;
    info!("wrote {out}");

    Ok(())
}

fn to_pixel(color: tincture::RgbColor) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

/// An upward pointing triangle with its tip at `(x, y)`.
fn draw_marker(img: &mut RgbImage, x: i32, y: i32) {
    let half = MARKER_HEIGHT as i32 - 1;
    let base = y + MARKER_HEIGHT as i32;
    draw_polygon_mut(
        img,
        &[
            Point::new(x, y),
            Point::new(x + half, base),
            Point::new(x - half, base),
        ],
        Rgb([0, 0, 0]),
    );
}

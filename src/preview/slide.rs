use raylib::prelude::*;

/// Share of the frame an image may cover before it is scaled down.
const FIT_RATIO: f32 = 0.9;

pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Scale fitting the image inside `frame`. Small images are never enlarged.
    fn fit_scale(&self, frame: &Rectangle) -> f32 {
        let width = self.image.width() as f32;
        let height = self.image.height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return 0.0;
        }
        (frame.width * FIT_RATIO / width)
            .min(frame.height * FIT_RATIO / height)
            .min(1.0)
    }

    /// Draws the image centered in `frame`, the slot this slide occupies in the strip.
    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rectangle) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.fit_scale(&frame);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                frame.x + (frame.width - scaled_width) * 0.5,
                frame.y + (frame.height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

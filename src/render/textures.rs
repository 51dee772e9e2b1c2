use glium::texture::{MipmapsOption, RawImage2d, SrgbTexture2d};
use glium::uniforms::{MagnifySamplerFilter, MinifySamplerFilter, Sampler};
use image::{Rgba, RgbaImage};
use lazy_static::lazy_static;
use send_wrapper::SendWrapper;

use crate::game::Sprite;

/// Width and height of a single sprite, in pixels.
pub const SPRITE_SIZE: u32 = 16;
/// Number of sprite columns and rows in the spritesheet.
pub const SHEET_DIMENSIONS: [u32; 2] = [8, 2];

const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FACE: Rgba<u8> = Rgba([192, 192, 192, 255]);
const SHADOW: Rgba<u8> = Rgba([128, 128, 128, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Colors of the numbers 1 to 8.
const NUMBER_COLORS: [Rgba<u8>; 8] = [
    Rgba([0, 0, 255, 255]),
    Rgba([0, 128, 0, 255]),
    Rgba([255, 0, 0, 255]),
    Rgba([0, 0, 128, 255]),
    Rgba([128, 0, 0, 255]),
    Rgba([0, 128, 128, 255]),
    Rgba([0, 0, 0, 255]),
    Rgba([128, 128, 128, 255]),
];

/// 3x5 glyphs for the digits 1 to 8, one row per byte, most significant bit
/// on the left.
const DIGIT_GLYPHS: [[u8; 5]; 8] = [
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
];
/// Size of one glyph pixel, in sprite pixels.
const GLYPH_SCALE: u32 = 2;

lazy_static! {
    /// Spritesheet texture for tiles.
    static ref TILES_SPRITESHEET_TEX: SendWrapper<SrgbTexture2d> = {
        let image = draw_spritesheet();
        let dimensions = image.dimensions();
        let raw_image = RawImage2d::from_raw_rgba_reversed(&image.into_raw(), dimensions);
        let t = SrgbTexture2d::with_mipmaps(&**crate::DISPLAY, raw_image, MipmapsOption::NoMipmap)
            .expect("Failed to create texture");
        SendWrapper::new(t)
    };
}

/// Returns a sampler for the tiles spritesheet.
pub fn tiles_spritesheet() -> Sampler<'static, SrgbTexture2d> {
    TILES_SPRITESHEET_TEX
        .sampled()
        .minify_filter(MinifySamplerFilter::Nearest)
        .magnify_filter(MagnifySamplerFilter::Nearest)
}

/// Returns the column and row of a sprite in the spritesheet.
pub fn sprite_coords(sprite: Sprite) -> [u32; 2] {
    match sprite {
        Sprite::Number(n) => [n.clamp(1, 8) as u32 - 1, 0],
        Sprite::Opened => [0, 1],
        Sprite::Unopened => [1, 1],
        Sprite::Flag => [2, 1],
        Sprite::Mine => [3, 1],
        Sprite::Exploded => [4, 1],
    }
}

/// Draws every sprite into a single image, top row first.
fn draw_spritesheet() -> RgbaImage {
    let [cols, rows] = SHEET_DIMENSIONS;
    let mut sheet = RgbaImage::new(cols * SPRITE_SIZE, rows * SPRITE_SIZE);

    let sprites = (1..=8)
        .map(Sprite::Number)
        .chain([
            Sprite::Opened,
            Sprite::Exploded,
            Sprite::Unopened,
            Sprite::Flag,
            Sprite::Mine,
        ]);
    for sprite in sprites {
        let [col, row] = sprite_coords(sprite);
        let mut canvas = Canvas {
            image: &mut sheet,
            x0: col * SPRITE_SIZE,
            y0: row * SPRITE_SIZE,
        };
        match sprite {
            Sprite::Number(n) => draw_number(&mut canvas, n),
            Sprite::Opened => draw_opened(&mut canvas),
            Sprite::Exploded => draw_exploded(&mut canvas),
            Sprite::Unopened => draw_unopened(&mut canvas),
            Sprite::Flag => draw_flag(&mut canvas),
            Sprite::Mine => draw_mine(&mut canvas),
        }
    }

    sheet
}

/// One sprite-sized region of the spritesheet.
struct Canvas<'a> {
    image: &'a mut RgbaImage,
    x0: u32,
    y0: u32,
}
impl Canvas<'_> {
    fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if x < SPRITE_SIZE && y < SPRITE_SIZE {
            self.image.put_pixel(self.x0 + x, self.y0 + y, color);
        }
    }
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x + dx, y + dy, color);
            }
        }
    }
}

fn draw_opened(c: &mut Canvas<'_>) {
    c.fill_rect(0, 0, SPRITE_SIZE, SPRITE_SIZE, FACE);
    c.fill_rect(0, 0, SPRITE_SIZE, 1, SHADOW);
    c.fill_rect(0, 0, 1, SPRITE_SIZE, SHADOW);
}

fn draw_exploded(c: &mut Canvas<'_>) {
    draw_opened(c);
    c.fill_rect(1, 1, SPRITE_SIZE - 1, SPRITE_SIZE - 1, RED);
}

fn draw_unopened(c: &mut Canvas<'_>) {
    c.fill_rect(0, 0, SPRITE_SIZE, SPRITE_SIZE, FACE);
    // Bevel: light on the top and left, shadow on the bottom and right.
    for i in 0..2 {
        c.fill_rect(0, i, SPRITE_SIZE - i, 1, LIGHT);
        c.fill_rect(i, 0, 1, SPRITE_SIZE - i, LIGHT);
        c.fill_rect(i + 1, SPRITE_SIZE - 1 - i, SPRITE_SIZE - i - 1, 1, SHADOW);
        c.fill_rect(SPRITE_SIZE - 1 - i, i + 1, 1, SPRITE_SIZE - i - 1, SHADOW);
    }
}

fn draw_number(c: &mut Canvas<'_>, n: u8) {
    let i = n.clamp(1, 8) as usize - 1;
    let color = NUMBER_COLORS[i];
    let x0 = (SPRITE_SIZE - 3 * GLYPH_SCALE) / 2;
    let y0 = (SPRITE_SIZE - 5 * GLYPH_SCALE) / 2;
    for (y, bits) in DIGIT_GLYPHS[i].iter().enumerate() {
        for x in 0..3 {
            if bits >> (2 - x) & 1 != 0 {
                c.fill_rect(
                    x0 + x * GLYPH_SCALE,
                    y0 + y as u32 * GLYPH_SCALE,
                    GLYPH_SCALE,
                    GLYPH_SCALE,
                    color,
                );
            }
        }
    }
}

fn draw_flag(c: &mut Canvas<'_>) {
    // Pennant.
    for y in 0..5 {
        let w = 5 - (y as i32 - 2).abs() as u32;
        c.fill_rect(8 - w, 3 + y, w, 1, RED);
    }
    // Pole and base.
    c.fill_rect(8, 3, 1, 8, BLACK);
    c.fill_rect(6, 11, 5, 1, BLACK);
    c.fill_rect(4, 12, 9, 1, BLACK);
}

fn draw_mine(c: &mut Canvas<'_>) {
    let center = SPRITE_SIZE as i32 / 2;
    for y in 0..SPRITE_SIZE as i32 {
        for x in 0..SPRITE_SIZE as i32 {
            let (dx, dy) = (x - center, y - center);
            let d2 = dx * dx + dy * dy;
            // Body and spikes.
            if d2 <= 16 || (d2 <= 36 && (dx == 0 || dy == 0)) {
                c.put(x as u32, y as u32, BLACK);
            }
        }
    }
    c.fill_rect(6, 6, 2, 2, LIGHT);
}

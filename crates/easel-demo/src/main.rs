//! Walk a square around a generated field.
//!
//! Arrow keys move, F11 toggles fullscreen, Escape quits. The main camera
//! follows the player through an anchor; a zoomed-out minimap in the corner
//! watches the same world-space, and a HUD lives in a world-space of its own.

use anyhow::Result;
use image::{Rgba, RgbaImage};

use easel_engine::camera::{AnchorId, CameraDesc};
use easel_engine::coords::{AngularDir, AngularVel, Color, Point2, Size2};
use easel_engine::core::{Control, EventHandler, GameLoop};
use easel_engine::device::GpuInit;
use easel_engine::input::{Key, Modifiers};
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::surface::{Layer, SurfaceId};
use easel_engine::window::{Runtime, WindowConfig, WindowIndex};
use easel_engine::Graphics;

const WORLD: u32 = 0;
const HUD: u32 = 1;

const FIELD_TILES: u32 = 24;
const TILE: u32 = 64;
const PLAYER: u32 = 32;
/// World units per frame.
const SPEED: f32 = 4.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut gfx = Graphics::new();
    let window = gfx.new_window(WindowConfig {
        title: "Graphics Engine".to_string(),
        dimensions: Size2::new(1600, 900),
        resolution: Size2::new(1600, 900),
        ..WindowConfig::default()
    });

    let mut demo = Demo::build(&mut gfx, window)?;

    let gpu = GpuInit {
        clear_color: Color::new(12, 14, 20, 255),
        ..GpuInit::default()
    };
    Runtime::run(gpu, &mut gfx, &mut demo)
}

#[derive(Debug, Default, Clone, Copy)]
struct Held {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Held {
    fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::ArrowUp => self.up = down,
            Key::ArrowDown => self.down = down,
            Key::ArrowLeft => self.left = down,
            Key::ArrowRight => self.right = down,
            _ => {}
        }
    }

    fn direction(self) -> Option<AngularDir> {
        AngularDir::from_axes(self.up, self.down, self.left, self.right)
    }
}

struct Demo {
    window: WindowIndex,
    anchor: AnchorId,
    player: SurfaceId,
    spinners: Vec<SurfaceId>,
    held: Held,
}

impl Demo {
    fn build(gfx: &mut Graphics, window: WindowIndex) -> Result<Self> {
        let field = FIELD_TILES * TILE;

        let ground = gfx.load_surface_from_image(checker(field, field, TILE))?;
        if let Some(s) = gfx.surface_mut(ground) {
            s.layer = Layer::Background;
        }

        let mut spinners = Vec::new();
        for i in 0..6u32 {
            let id = gfx.load_surface_from_image(disc(48, palette(i)))?;
            let Some(s) = gfx.surface_mut(id) else { continue };
            s.layer = Layer::Midground;
            s.pos = Point2::new((200 + i * 230) as f32, (300 + (i % 3) * 350) as f32);
            s.rotation = i as f32 * 15.0;
            spinners.push(id);
        }

        let start = Point2::new((field / 2) as f32, (field / 2) as f32);
        let player = gfx.load_surface_from_image(square(PLAYER, Rgba([240, 200, 60, 255])))?;
        if let Some(s) = gfx.surface_mut(player) {
            s.layer = Layer::Foreground;
            s.pos = start;
        }
        let anchor = gfx.anchors_mut().insert(start);

        let res = gfx.window(window)?.resolution().as_f32();
        let half = PLAYER as f32 / 2.0;

        // Follows the player, centered.
        gfx.new_camera(CameraDesc {
            world_pos: Point2::new(half - res.w / 2.0, half - res.h / 2.0),
            anchor: Some(anchor),
            window,
            world_space: WORLD,
            ..CameraDesc::default()
        })?;

        // Whole field, top-right corner.
        gfx.new_camera(CameraDesc {
            screen_pos: Point2::new(100.0, 0.0),
            dimensions: Size2::new(20.0, 20.0 * 16.0 / 9.0),
            zoom: Size2::new(320.0 / field as f32, 320.0 / field as f32),
            window,
            world_space: WORLD,
            ..CameraDesc::default()
        })?;

        let banner = gfx.load_surface_from_image(square(16, Rgba([255, 255, 255, 255])))?;
        if let Some(s) = gfx.surface_mut(banner) {
            s.world_space = HUD;
            s.layer = Layer::Overlay;
            s.size_offset = Size2::new(400.0, 24.0);
            s.pos = Point2::new(16.0, 16.0);
            s.color = Color::new(20, 20, 30, 180);
        }
        gfx.new_camera(CameraDesc {
            screen_pos: Point2::new(0.0, 100.0),
            dimensions: Size2::new(30.0, 10.0),
            window,
            world_space: HUD,
            ..CameraDesc::default()
        })?;

        Ok(Self {
            window,
            anchor,
            player,
            spinners,
            held: Held::default(),
        })
    }
}

impl EventHandler for Demo {
    fn on_key_down(&mut self, gfx: &mut Graphics, key: Key, _: Modifiers, _: u32, repeat: bool) -> Control {
        match key {
            Key::Escape => return Control::Exit,
            Key::F11 if !repeat => {
                if let Err(e) = gfx.toggle_fullscreen(self.window) {
                    log::warn!("fullscreen toggle failed: {e}");
                }
            }
            k => self.held.set(k, true),
        }
        Control::Continue
    }

    fn on_key_up(&mut self, _: &mut Graphics, key: Key, _: Modifiers, _: u32) -> Control {
        self.held.set(key, false);
        Control::Continue
    }

    fn on_input_blur(&mut self, _: &mut Graphics) -> Control {
        self.held = Held::default();
        Control::Continue
    }

    fn on_resize(&mut self, _: &mut Graphics, window: WindowIndex, width: u32, height: u32) -> Control {
        log::info!("window {} is now {width}x{height}", window.0);
        Control::Continue
    }
}

impl GameLoop for Demo {
    fn update(&mut self, gfx: &mut Graphics) -> Control {
        let Some(dir) = self.held.direction() else { return Control::Continue };

        let mut pos = match gfx.anchors().get(self.anchor) {
            Ok(pos) => pos,
            Err(e) => {
                log::error!("player anchor lost: {e}");
                return Control::Exit;
            }
        };
        pos += AngularVel::toward(dir, SPEED);

        let limit = (FIELD_TILES * TILE - PLAYER) as f32;
        pos = Point2::new(pos.x.clamp(0.0, limit), pos.y.clamp(0.0, limit));

        if gfx.anchors_mut().set(self.anchor, pos).is_err() {
            return Control::Exit;
        }
        if let Some(s) = gfx.surface_mut(self.player) {
            s.pos = pos;
        }
        Control::Continue
    }

    fn late_update(&mut self, gfx: &mut Graphics) -> Control {
        for (i, &id) in self.spinners.iter().enumerate() {
            if let Some(s) = gfx.surface_mut(id) {
                s.rotation = (s.rotation + 1.0 + i as f32 * 0.5) % 360.0;
            }
        }
        Control::Continue
    }
}

// ── generated art ─────────────────────────────────────────────────────────

fn palette(i: u32) -> Rgba<u8> {
    const COLORS: [[u8; 4]; 6] = [
        [230, 80, 80, 255],
        [80, 200, 120, 255],
        [90, 140, 240, 255],
        [220, 120, 220, 255],
        [240, 170, 70, 255],
        [90, 210, 220, 255],
    ];
    Rgba(COLORS[i as usize % COLORS.len()])
}

fn checker(w: u32, h: u32, cell: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([38, 52, 44, 255])
        } else {
            Rgba([46, 62, 52, 255])
        }
    })
}

fn square(size: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(size, size, color)
}

/// Filled circle with a notch so rotation is visible.
fn disc(size: u32, color: Rgba<u8>) -> RgbaImage {
    let r = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        let inside = dx * dx + dy * dy <= r * r;
        let notch = dx > 0.0 && dy.abs() < r / 6.0;
        if inside && !notch { color } else { Rgba([0, 0, 0, 0]) }
    })
}

//! SDL2 window and blocking event loop.
//!
//! Owns the single viewer window: renders the array with the current
//! options, uploads the result as an RGB24 texture, and blocks on the next
//! event. Toolkit events are translated into [`ViewerEvent`] values and fed
//! through the pure reducer; only an `Updated` outcome triggers a re-render.
//! A failed re-render keeps the previous image on screen.

use anyhow::{Context, Result};
use image::RgbImage;
use log::warn;
use ndarray::Array2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use raster::controller::{reduce, EventOutcome, RenderOptions, ViewerEvent};
use raster::render::render_rgb;

trait SdlResultExt<T> {
    fn sdl_context(self, msg: &str) -> Result<T>;
}

impl<T> SdlResultExt<T> for std::result::Result<T, String> {
    fn sdl_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| anyhow::anyhow!("{}: {}", msg, e))
    }
}

/// Open the viewer window and run the event loop until close.
pub fn run(data: &Array2<u8>, initial: RenderOptions) -> Result<()> {
    let sdl_context = sdl2::init().map_err(|e| anyhow::anyhow!("SDL init failed: {}", e))?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| anyhow::anyhow!("Video subsystem init failed: {}", e))?;

    let mut options = initial;
    // Startup has no previous frame to fall back to, so a failure here aborts.
    let mut img = render_rgb(data, options.pixel_size, options.colormap)
        .context("Initial render failed")?;

    let mode = video_subsystem
        .desktop_display_mode(0)
        .sdl_context("Failed to get display mode")?;
    let (win_w, win_h) = fit_to_display(img.width(), img.height(), mode.w, mode.h);

    let window = video_subsystem
        .window(&title(options), win_w, win_h)
        .position_centered()
        .resizable()
        .build()
        .context("Failed to create window")?;

    let mut canvas = window
        .into_canvas()
        .build()
        .context("Failed to create canvas")?;
    let texture_creator = canvas.texture_creator();
    let mut texture = upload(&texture_creator, &img)?;

    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow::anyhow!("Failed to get event pump: {}", e))?;

    present(&mut canvas, &texture, img.dimensions())?;

    loop {
        let event = event_pump.wait_event();
        if let Some(ui_event) = translate(&event, options) {
            match reduce(options, &ui_event) {
                EventOutcome::Close => break,
                EventOutcome::Unchanged => {}
                EventOutcome::Updated(next) => {
                    match render_rgb(data, next.pixel_size, next.colormap) {
                        Ok(new_img) => {
                            options = next;
                            img = new_img;
                            texture = upload(&texture_creator, &img)?;
                            let (w, h) = fit_to_display(img.width(), img.height(), mode.w, mode.h);
                            canvas
                                .window_mut()
                                .set_size(w, h)
                                .map_err(|e| anyhow::anyhow!("Failed to resize window: {}", e))?;
                            canvas
                                .window_mut()
                                .set_title(&title(options))
                                .context("Failed to set window title")?;
                        }
                        Err(e) => warn!("re-render failed, keeping previous image: {e}"),
                    }
                }
            }
        }
        present(&mut canvas, &texture, img.dimensions())?;
    }

    Ok(())
}

/// Map toolkit events to viewer events. Unrecognized events (mouse motion,
/// focus changes, exposure) return None and only trigger a repaint.
fn translate(event: &Event, options: RenderOptions) -> Option<ViewerEvent> {
    match event {
        Event::Quit { .. } => Some(ViewerEvent::CloseRequested),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => match *keycode {
            Keycode::Escape | Keycode::Q => Some(ViewerEvent::CloseRequested),
            Keycode::Up => Some(ViewerEvent::PixelSizeChanged(
                options.pixel_size.saturating_add(1),
            )),
            Keycode::Down => Some(ViewerEvent::PixelSizeChanged(
                options.pixel_size.saturating_sub(1),
            )),
            Keycode::Right => Some(ViewerEvent::ColormapSelected(options.colormap.next())),
            Keycode::Left => Some(ViewerEvent::ColormapSelected(options.colormap.previous())),
            Keycode::Num1 => Some(ViewerEvent::PixelSizeChanged(1)),
            Keycode::Num2 => Some(ViewerEvent::PixelSizeChanged(2)),
            Keycode::Num3 => Some(ViewerEvent::PixelSizeChanged(3)),
            Keycode::Num4 => Some(ViewerEvent::PixelSizeChanged(4)),
            Keycode::Num5 => Some(ViewerEvent::PixelSizeChanged(5)),
            _ => None,
        },
        _ => None,
    }
}

fn title(options: RenderOptions) -> String {
    format!(
        "Data Raster [{} x{}]",
        options.colormap, options.pixel_size
    )
}

/// Clamp the image dimensions to the desktop display mode.
fn fit_to_display(img_w: u32, img_h: u32, mode_w: i32, mode_h: i32) -> (u32, u32) {
    (
        img_w.min(mode_w.max(1) as u32),
        img_h.min(mode_h.max(1) as u32),
    )
}

fn upload<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    img: &RgbImage,
) -> Result<Texture<'a>> {
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, img.width(), img.height())
        .map_err(|e| anyhow::anyhow!("Failed to create texture: {:?}", e))?;
    texture
        .update(None, img.as_raw(), (img.width() * 3) as usize)
        .map_err(|e| anyhow::anyhow!("Failed to update texture: {:?}", e))?;
    Ok(texture)
}

/// Repaint the canvas, scaling the image down to fit when the window is
/// smaller than the image (never above 1:1) and centering it.
fn present(
    canvas: &mut WindowCanvas,
    texture: &Texture,
    (img_w, img_h): (u32, u32),
) -> Result<()> {
    let (win_w, win_h) = canvas
        .output_size()
        .sdl_context("Failed to get canvas size")?;

    let scale = (win_w as f32 / img_w as f32)
        .min(win_h as f32 / img_h as f32)
        .min(1.0);
    let scaled_w = ((img_w as f32 * scale) as u32).max(1);
    let scaled_h = ((img_h as f32 * scale) as u32).max(1);
    let x = win_w.saturating_sub(scaled_w) / 2;
    let y = win_h.saturating_sub(scaled_h) / 2;
    let dst_rect = Rect::new(x as i32, y as i32, scaled_w, scaled_h);

    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    canvas
        .copy(texture, None, Some(dst_rect))
        .map_err(|e| anyhow::anyhow!("Failed to copy texture: {}", e))?;
    canvas.present();

    Ok(())
}

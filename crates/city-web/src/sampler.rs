//! Readback path from the rendered scene to text. The GPU canvas is drawn
//! scaled down onto a small 2d canvas sized one pixel per character cell,
//! then the pixel data feeds the luminance ramp.

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys as web;

use city_core::{frame_to_text, AsciiGrid};

pub struct AsciiSampler {
    grid: AsciiGrid,
    sample_canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl AsciiSampler {
    pub fn new(
        document: &web::Document,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<Self> {
        let sample_canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!("sample canvas creation failed: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow!("sample canvas is not a canvas"))?;
        let ctx = sample_canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context unavailable: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has unexpected type"))?;

        let mut sampler = Self {
            grid: AsciiGrid::from_viewport(viewport_width, viewport_height),
            sample_canvas,
            ctx,
        };
        sampler.apply_grid();
        Ok(sampler)
    }

    fn apply_grid(&mut self) {
        self.sample_canvas.set_width(self.grid.width);
        self.sample_canvas.set_height(self.grid.height);
    }

    /// Recompute the character grid for a new viewport size.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        let grid = AsciiGrid::from_viewport(viewport_width, viewport_height);
        if grid != self.grid {
            self.grid = grid;
            self.apply_grid();
        }
    }

    /// Downsample `source` and convert the frame to one text block.
    pub fn sample(&self, source: &web::HtmlCanvasElement) -> Result<String> {
        let (w, h) = (self.grid.width as f64, self.grid.height as f64);
        self.ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(source, 0.0, 0.0, w, h)
            .map_err(|e| anyhow!("frame downsample failed: {:?}", e))?;
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| anyhow!("frame readback failed: {:?}", e))?;
        let rgba = image.data();
        Ok(frame_to_text(&rgba, self.grid)?)
    }
}

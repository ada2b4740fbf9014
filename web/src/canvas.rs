use emojisweeper_core::{Rect, Rgb, Surface, TextStyle};
use web_sys::CanvasRenderingContext2d;

/// [`Surface`] over a 2D canvas context of a known pixel size.
pub(crate) struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    pub(crate) fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        ctx.set_text_baseline("top");
        ctx.set_text_align("left");
        Self { ctx, width, height }
    }
}

pub(crate) fn font(style: &TextStyle) -> String {
    let weight = if style.bold { "bold" } else { "normal" };
    format!("{} {}px Arial", weight, style.size)
}

impl Surface for CanvasSurface<'_> {
    fn fill_background(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0., 0., self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.ctx.set_font(&font(&style));
        self.ctx.set_fill_style_str(&style.color.to_string());
        if let Err(err) = self.ctx.fill_text(text, x, y) {
            log::error!("failed to draw {:?}: {:?}", text, err);
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use emojisweeper_core::{Board, BoardGeometry, GameSession, Renderer};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlCanvasElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn context(width: f64, height: f64) -> CanvasRenderingContext2d {
        let document = gloo::utils::document();
        let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn renders_session_onto_a_real_canvas() {
        let geometry = BoardGeometry::DEFAULT;
        let board = Board::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        let session = GameSession::from_board(board, 0);
        let (width, height) = geometry.surface_size(session.size());
        let ctx = context(width, height);

        let mut surface = CanvasSurface::new(&ctx, width, height);
        Renderer::new(geometry).draw(&session, &mut surface);

        assert_eq!(ctx.text_baseline(), "top");
        assert!(ctx.font().contains("px Arial"), "font was {:?}", ctx.font());
    }
}

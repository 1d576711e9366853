//! Back-to-front compositing
//!
//! Each window paints inside a saved, translated, clipped context so it
//! can draw as if it owned a (0,0)-origin canvas of its own size; client
//! painters get the same treatment one level deeper, restricted to the
//! client area.

use crate::math::{Rect, Vec2, THEME};
use crate::render::{Canvas, ContentPainter, TextBaseline};
use crate::window::{Window, WindowId};
use super::WindowManager;

impl WindowManager {
    /// Composite all windows onto the canvas
    ///
    /// Fills the backdrop, then paints windows back to front so the
    /// active window lands on top.
    pub fn paint(&mut self, ctx: &mut dyn Canvas) {
        ctx.begin_path();
        ctx.set_fill_style(THEME.canvas_backdrop);
        ctx.fill_rect(Rect::from_pos_size(Vec2::ZERO, self.surface));

        let order: Vec<WindowId> = self.windows.order().to_vec();
        for id in order {
            let window = match self.windows.get(id) {
                Some(window) => window.clone(),
                None => continue,
            };

            ctx.save();
            ctx.translate(window.position);
            ctx.begin_path();
            ctx.clip_rect(window.local_rect());

            paint_title_bar(ctx, &window);
            paint_close_button(ctx, &window);
            paint_client_area(ctx, &window, self.painter_mut(id));

            ctx.restore();
        }
    }
}

fn paint_title_bar(ctx: &mut dyn Canvas, window: &Window) {
    ctx.begin_path();

    ctx.set_fill_style(if window.active {
        THEME.title_background_active
    } else {
        THEME.title_background_inactive
    });
    ctx.set_stroke_style(if window.active {
        THEME.border_active
    } else {
        THEME.border_inactive
    });

    ctx.fill_rect(window.title_bar_rect());
    ctx.stroke_rect(window.title_bar_rect());

    ctx.set_fill_style(if window.active {
        THEME.title_foreground_active
    } else {
        THEME.title_foreground_inactive
    });
    ctx.set_font(THEME.font_title);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.fill_text(
        &window.title,
        Vec2::new(5.0, (THEME.title_height / 2.0).round()),
    );
}

fn paint_close_button(ctx: &mut dyn Canvas, window: &Window) {
    ctx.begin_path();

    ctx.set_font(THEME.font_close_button);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.fill_text(
        "X",
        Vec2::new(
            window.size.width - THEME.close_button_width,
            (THEME.title_height / 2.0).round(),
        ),
    );
}

fn paint_client_area(
    ctx: &mut dyn Canvas,
    window: &Window,
    painter: Option<&mut Box<dyn ContentPainter>>,
) {
    let content = window.content_rect();

    ctx.begin_path();
    ctx.set_fill_style(THEME.client_area_background);
    ctx.fill_rect(content);

    if let Some(painter) = painter {
        // The painter sees the client area's top-left as (0, 0) and
        // cannot escape its bounds.
        ctx.save();
        ctx.translate(Vec2::new(0.0, THEME.title_height));

        ctx.begin_path();
        ctx.clip_rect(Rect::from_pos_size(Vec2::ZERO, window.client_area()));

        painter.paint(window.id, ctx, window.client_area());

        ctx.restore();
    }

    ctx.begin_path();
    ctx.set_stroke_style(if window.active {
        THEME.border_active
    } else {
        THEME.border_inactive
    });
    ctx.stroke_rect(content);
}

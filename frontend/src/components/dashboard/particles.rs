//! Background particle field that fills its parent element.

use common::animation::{ParticleField, PARTICLE_COUNT};
use gloo_timers::callback::Interval;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::canvas::{context_2d, dot, FRAME_INTERVAL_MS};
use crate::components::helpers::random_unit;

pub enum Msg {
    Frame,
}

pub struct ParticleCanvas {
    canvas_ref: NodeRef,
    field: Option<ParticleField>,
    _ticker: Option<Interval>,
}

impl Component for ParticleCanvas {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            field: None,
            _ticker: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self._ticker = Some(Interval::new(FRAME_INTERVAL_MS, move || {
                link.send_message(Msg::Frame)
            }));
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Frame = msg;
        let Some((canvas, context)) = context_2d(&self.canvas_ref) else {
            return false;
        };
        let (width, height) = fit_to_parent(&canvas);
        let field = self
            .field
            .get_or_insert_with(|| ParticleField::new(PARTICLE_COUNT, width, height, random_unit));
        if field.width != width || field.height != height {
            field.resize(width, height);
        }
        field.step();
        draw(&context, field);
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! { <canvas class="particle-canvas" ref={self.canvas_ref.clone()} /> }
    }
}

/// Matches the canvas bitmap to its parent's box and returns the size.
fn fit_to_parent(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = canvas
        .parent_element()
        .map(|parent| (parent.client_width().max(1) as u32, parent.client_height().max(1) as u32))
        .unwrap_or((canvas.width(), canvas.height()));
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (f64::from(width), f64::from(height))
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    context.clear_rect(0.0, 0.0, field.width, field.height);

    context.set_line_width(1.0);
    for link in field.links() {
        context.set_stroke_style_str(&format!("rgba(33, 230, 193, {:.3})", link.opacity * 0.3));
        context.begin_path();
        context.move_to(link.from.x, link.from.y);
        context.line_to(link.to.x, link.to.y);
        context.stroke();
    }

    context.set_fill_style_str("rgba(33, 230, 193, 0.6)");
    for particle in &field.particles {
        dot(context, particle.position.x, particle.position.y, particle.radius);
    }
}

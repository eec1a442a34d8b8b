//! Rotating DNA helix drawn on a fixed-size canvas.

use common::animation::{
    helix_frame, HelixFrame, BASE_PAIR_COLOR, HELIX_HEIGHT, HELIX_TIME_STEP, HELIX_WIDTH,
    STRAND_COLORS,
};
use gloo_timers::callback::Interval;
use web_sys::CanvasRenderingContext2d;
use yew::prelude::*;

use super::canvas::{context_2d, dot, FRAME_INTERVAL_MS};

pub enum Msg {
    Frame,
}

pub struct DnaHelix {
    canvas_ref: NodeRef,
    time: f64,
    _ticker: Option<Interval>,
}

impl Component for DnaHelix {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            time: 0.0,
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
        match msg {
            Msg::Frame => {
                if let Some((canvas, context)) = context_2d(&self.canvas_ref) {
                    let frame = helix_frame(self.time, canvas.width(), canvas.height());
                    draw(&context, &frame, canvas.width(), canvas.height());
                }
                self.time += HELIX_TIME_STEP;
            }
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas
                class="helix-canvas"
                ref={self.canvas_ref.clone()}
                width={HELIX_WIDTH.to_string()}
                height={HELIX_HEIGHT.to_string()}
            />
        }
    }
}

fn draw(context: &CanvasRenderingContext2d, frame: &HelixFrame, width: u32, height: u32) {
    context.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));

    context.set_line_width(3.0);
    for (strand, color) in frame.strands.iter().zip(STRAND_COLORS) {
        let Some((first, rest)) = strand.split_first() else {
            continue;
        };
        context.set_stroke_style_str(color);
        context.begin_path();
        context.move_to(first.x, first.y);
        for point in rest {
            context.line_to(point.x, point.y);
        }
        context.stroke();
    }

    context.set_line_width(2.0);
    context.set_stroke_style_str(BASE_PAIR_COLOR);
    context.set_fill_style_str(BASE_PAIR_COLOR);
    for (left, right) in &frame.rungs {
        context.begin_path();
        context.move_to(left.x, left.y);
        context.line_to(right.x, right.y);
        context.stroke();
        dot(context, left.x, left.y, 4.0);
        dot(context, right.x, right.y, 4.0);
    }
}

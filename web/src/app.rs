use emojisweeper_core as game;
use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::canvas::CanvasSurface;
use crate::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Pointer(game::PointerEvent),
    Frame,
    NewGame,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the first game, later games always draw a fresh one
    #[prop_or_default]
    pub seed: Option<u64>,
}

fn new_session(seed: u64) -> game::GameSession {
    game::GameSession::new(game::GameConfig::DEFAULT, seed).expect("default config must be valid")
}

/// Converts a raw button mask and canvas offset into a game pointer event.
fn pointer_event(buttons: u16, x: i32, y: i32) -> Option<game::PointerEvent> {
    let button = MouseButtons::from_bits_truncate(buttons).pointer_button()?;
    Some(game::PointerEvent {
        button,
        x: f64::from(x),
        y: f64::from(y),
    })
}

pub(crate) struct GameView {
    session: game::GameSession,
    renderer: game::Renderer,
    canvas: NodeRef,
    frame: Option<AnimationFrame>,
}

impl GameView {
    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        if self.frame.is_none() {
            let link = ctx.link().clone();
            self.frame = Some(request_animation_frame(move |_timestamp| {
                link.send_message(Msg::Frame)
            }));
        }
    }

    fn draw(&self) {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            log::warn!("canvas not mounted yet");
            return;
        };

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx,
            Ok(None) => {
                log::error!("canvas has no 2d context");
                return;
            }
            Err(err) => {
                log::error!("failed to get 2d context: {:?}", err);
                return;
            }
        };
        let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
            log::error!("2d context has an unexpected type");
            return;
        };

        let mut surface = CanvasSurface::new(&ctx, canvas.width().into(), canvas.height().into());
        self.renderer.draw(&self.session, &mut surface);
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: new_session(seed),
            renderer: game::Renderer::new(game::BoardGeometry::DEFAULT),
            canvas: NodeRef::default(),
            frame: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Frame => {
                self.frame = None;
                self.draw();
                if self.session.is_finished() {
                    log::debug!("game finished, frame loop halted");
                } else {
                    self.schedule_frame(ctx);
                }
            }
            Pointer(event) => {
                let outcome = game::handle_pointer(&mut self.session, &self.renderer.geometry, event);
                log::debug!("{:?} -> {:?}", event, outcome);
                if outcome.has_update() {
                    self.schedule_frame(ctx);
                }
            }
            NewGame => {
                self.session = new_session(js_random_seed());
                self.schedule_frame(ctx);
            }
        }

        // the canvas is redrawn by the frame loop, the markup never changes
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (width, height) = self.renderer.geometry.surface_size(self.session.size());

        let onmousedown = ctx.link().batch_callback(|e: MouseEvent| {
            let event = pointer_event(e.buttons(), e.offset_x(), e.offset_y());
            log::trace!("mouse down {:?}", event);
            event.map(Msg::Pointer)
        });
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="emojisweeper" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <canvas
                    ref={self.canvas.clone()}
                    width={width.to_string()}
                    height={height.to_string()}
                    {onmousedown}
                />
                <button id="reload" onclick={cb_new_game}>{"New game"}</button>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.schedule_frame(ctx);
        }
    }
}

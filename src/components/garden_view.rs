use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, Window,
};
use yew::prelude::*;
use yew_garden::model::Rewards;
use yew_garden::paint::BrushSize;
use yew_garden::{FieldBounds, GardenAction, GardenSession, Season, Tool};

use super::{
    intro_overlay::IntroOverlay, paint_controls::PaintControls, settings_modal::SettingsModal,
    stats_panel::StatsPanel, tool_palette::ToolPalette,
};
use crate::audio::BrowserFeedback;
use crate::render;
use crate::state::pointer::to_logical;
use crate::state::{storage, PointerState, SessionHandle};

const AUTOSAVE_MS: i32 = 5000;
const HUD_REFRESH_MS: i32 = 250;

/// What the panels around the canvas show; refreshed from the session on a timer.
#[derive(Clone, PartialEq, Debug)]
struct Hud {
    rewards: Rewards,
    season: Season,
    tool: Tool,
    color: String,
    brush: BrushSize,
    can_undo: bool,
}

impl Hud {
    fn capture(session: &SessionHandle) -> Self {
        let s = session.0.borrow();
        Self {
            rewards: s.rewards(),
            season: s.season(),
            tool: s.selected_tool(),
            color: s.paint_color().to_string(),
            brush: s.brush(),
            can_undo: s.can_undo(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GardenViewProps {
    pub session: SessionHandle,
    pub sound_on: bool,
    pub voice_on: bool,
    pub show_intro: bool,
    pub open_settings: bool,
    pub on_toggle_sound: Callback<()>,
    pub on_toggle_voice: Callback<()>,
    pub on_hide_intro: Callback<()>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
    pub on_close_settings: Callback<()>,
    pub on_hard_reset: Callback<()>,
}

/// Sizes the canvas backing store to its CSS box and returns the logical field.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (FieldBounds, f64) {
    let dpr = window.device_pixel_ratio().max(1.0);
    let width = (canvas.client_width() as f64).max(1.0);
    let height = (canvas.client_height() as f64).max(1.0);
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    (FieldBounds::new(width, height), dpr)
}

#[function_component(GardenView)]
pub fn garden_view(props: &GardenViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let feedback = use_mut_ref(|| BrowserFeedback::new(props.sound_on, props.voice_on));
    let pointer = use_mut_ref(PointerState::default);
    let hud = use_state(|| Hud::capture(&props.session));
    let hud_last = use_mut_ref(|| Hud::capture(&props.session));

    let refresh_hud: Rc<dyn Fn()> = {
        let session = props.session.clone();
        let setter = hud.setter();
        let hud_last = hud_last.clone();
        Rc::new(move || {
            let snap = Hud::capture(&session);
            let mut last = hud_last.borrow_mut();
            if *last != snap {
                *last = snap.clone();
                setter.set(snap);
            }
        })
    };

    // Effect: mirror sound/voice toggles into the sink
    {
        let feedback = feedback.clone();
        use_effect_with((props.sound_on, props.voice_on), move |(sound, voice)| {
            let mut fb = feedback.borrow_mut();
            fb.sound_on = *sound;
            fb.voice_on = *voice;
            || ()
        });
    }

    // Main mount effect (events, loops)
    {
        let canvas_ref = canvas_ref.clone();
        let session = props.session.clone();
        let feedback = feedback.clone();
        let pointer = pointer.clone();
        let refresh_hud = refresh_hud.clone();
        use_effect_with(session.clone(), move |_| {
            let teardown = web_sys::window().zip(canvas_ref.cast::<HtmlCanvasElement>()).map(
                |(window, canvas)| attach(window, canvas, session, feedback, pointer, refresh_hud),
            );
            if teardown.is_none() {
                log::error!("garden canvas unavailable");
            }
            move || {
                if let Some(t) = teardown {
                    t();
                }
            }
        });
    }

    let run = {
        let session = props.session.clone();
        let refresh_hud = refresh_hud.clone();
        move |f: Box<dyn Fn(&mut GardenSession)>| {
            f(&mut session.0.borrow_mut());
            refresh_hud();
        }
    };
    let select_tool: Callback<Tool> = {
        let run = run.clone();
        let session = props.session.clone();
        Callback::from(move |tool: Tool| {
            run(Box::new(move |s: &mut GardenSession| s.select_tool(tool)));
            if tool.is_immediate() {
                storage::save_garden(&session.0.borrow());
            }
        })
    };
    let cycle_season: Callback<()> = {
        let run = run.clone();
        Callback::from(move |()| run(Box::new(|s: &mut GardenSession| s.cycle_season())))
    };
    let set_color: Callback<String> = {
        let run = run.clone();
        Callback::from(move |c: String| {
            run(Box::new(move |s: &mut GardenSession| {
                s.dispatch(GardenAction::SetPaintColor(c.clone()))
            }))
        })
    };
    let set_brush: Callback<BrushSize> = {
        let run = run.clone();
        Callback::from(move |b: BrushSize| {
            run(Box::new(move |s: &mut GardenSession| s.dispatch(GardenAction::SetBrushSize(b))))
        })
    };
    let hide_intro: Callback<()> = {
        let cb = props.on_hide_intro.clone();
        let feedback = feedback.clone();
        Callback::from(move |()| {
            // The intro button is the first user gesture; audio may start now.
            feedback.borrow_mut().unlock();
            cb.emit(());
        })
    };

    let h = (*hud).clone();
    let show_paint = matches!(h.tool, Tool::Paint);

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none; user-select:none; font-family:sans-serif;">
        <canvas ref={canvas_ref.clone()} id="garden-canvas" style="display:block; width:100%; height:100%; cursor:crosshair;"></canvas>
        <StatsPanel rewards={h.rewards} season={h.season} on_cycle_season={cycle_season} />
        <ToolPalette selected={h.tool} can_undo={h.can_undo} on_select={select_tool} on_open_settings={props.on_open_settings.clone()} on_show_help={props.on_show_help.clone()} />
        { if show_paint { html!{ <PaintControls color={h.color.clone()} brush={h.brush} on_color={set_color} on_brush={set_brush} /> } } else { html!{} } }
        <IntroOverlay show={props.show_intro} hide_intro={hide_intro} />
        <SettingsModal show={props.open_settings} on_close={props.on_close_settings.clone()} sound_on={props.sound_on} on_toggle_sound={props.on_toggle_sound.clone()} voice_on={props.voice_on} on_toggle_voice={props.on_toggle_voice.clone()} on_hard_reset={props.on_hard_reset.clone()} />
    </div>}
}

fn listen(target: &EventTarget, name: &str, cb: &js_sys::Function) {
    if target.add_event_listener_with_callback(name, cb).is_err() {
        log::warn!("could not listen for {name}");
    }
}

fn unlisten(target: &EventTarget, name: &str, cb: &js_sys::Function) {
    let _ = target.remove_event_listener_with_callback(name, cb);
}

/// Wires the canvas: RAF loop, pointer listeners, timers. Returns the teardown.
fn attach(
    window: Window,
    canvas: HtmlCanvasElement,
    session: SessionHandle,
    feedback: Rc<RefCell<BrowserFeedback>>,
    pointer: Rc<RefCell<PointerState>>,
    refresh_hud: Rc<dyn Fn()>,
) -> Box<dyn FnOnce()> {
    let dpr = Rc::new(Cell::new(1.0));
    let apply_size = {
        let window = window.clone();
        let canvas = canvas.clone();
        let session = session.clone();
        let dpr = dpr.clone();
        move || {
            let (bounds, ratio) = fit_canvas(&window, &canvas);
            dpr.set(ratio);
            session.0.borrow_mut().resize(bounds);
        }
    };
    apply_size();

    let ctx: Option<CanvasRenderingContext2d> = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
    if ctx.is_none() {
        log::warn!("2d context unavailable, drawing disabled");
    }

    // RAF loop
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None::<i32>));
    let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    {
        let frame_cell_loop = frame_cell.clone();
        let window_loop = window.clone();
        let session = session.clone();
        let feedback = feedback.clone();
        let alive = alive.clone();
        let raf_id_loop = raf_id.clone();
        let dpr = dpr.clone();
        *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if !alive.get() {
                return;
            }
            {
                let mut s = session.0.borrow_mut();
                s.frame(ts);
                s.drain_events(&mut *feedback.borrow_mut());
            }
            if let Some(ctx) = &ctx {
                render::draw(ctx, &session.0.borrow(), dpr.get());
            }
            if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id_loop.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(cb) = frame_cell.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }

    let finish_gesture = {
        let session = session.clone();
        let pointer = pointer.clone();
        let refresh_hud = refresh_hud.clone();
        move || {
            if !pointer.borrow().is_down() {
                return;
            }
            pointer.borrow_mut().release();
            let mut s = session.0.borrow_mut();
            s.pointer_up();
            storage::save_garden(&s);
            drop(s);
            refresh_hud();
        }
    };

    // Mouse events
    let mousedown_cb = {
        let canvas = canvas.clone();
        let session = session.clone();
        let feedback = feedback.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if e.button() != 0 {
                return;
            }
            feedback.borrow_mut().unlock();
            let bounds = session.0.borrow().bounds();
            let p = to_logical(&canvas, e.client_x() as f64, e.client_y() as f64, bounds);
            pointer.borrow_mut().press(p, false);
            session.0.borrow_mut().pointer_down(p);
        }) as Box<dyn FnMut(_)>)
    };
    let mousemove_cb = {
        let canvas = canvas.clone();
        let session = session.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if !pointer.borrow().mouse_down {
                return;
            }
            let bounds = session.0.borrow().bounds();
            let p = to_logical(&canvas, e.client_x() as f64, e.client_y() as f64, bounds);
            pointer.borrow_mut().track(p);
            session.0.borrow_mut().pointer_move(p);
        }) as Box<dyn FnMut(_)>)
    };
    let mouseup_cb = {
        let finish_gesture = finish_gesture.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| finish_gesture()) as Box<dyn FnMut(_)>)
    };
    let contextmenu_cb =
        Closure::wrap(Box::new(move |e: web_sys::Event| e.prevent_default()) as Box<dyn FnMut(_)>);

    // Touch
    let touch_start_cb = {
        let canvas = canvas.clone();
        let session = session.clone();
        let feedback = feedback.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            let Some(t0) = e.touches().item(0) else {
                return;
            };
            feedback.borrow_mut().unlock();
            let bounds = session.0.borrow().bounds();
            let p = to_logical(&canvas, t0.client_x() as f64, t0.client_y() as f64, bounds);
            pointer.borrow_mut().press(p, true);
            session.0.borrow_mut().pointer_down(p);
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move_cb = {
        let canvas = canvas.clone();
        let session = session.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            if !pointer.borrow().touch_active {
                return;
            }
            if let Some(t0) = e.touches().item(0) {
                let bounds = session.0.borrow().bounds();
                let p = to_logical(&canvas, t0.client_x() as f64, t0.client_y() as f64, bounds);
                pointer.borrow_mut().track(p);
                session.0.borrow_mut().pointer_move(p);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let touch_end_cb = {
        let finish_gesture = finish_gesture.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            if e.touches().length() == 0 {
                finish_gesture();
            }
        }) as Box<dyn FnMut(_)>)
    };

    // Keydown: Ctrl/Cmd+Z undo
    let keydown_cb = {
        let session = session.clone();
        let refresh_hud = refresh_hud.clone();
        Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            let key = e.key();
            if (e.ctrl_key() || e.meta_key()) && (key == "z" || key == "Z") {
                e.prevent_default();
                session.0.borrow_mut().select_tool(Tool::Undo);
                refresh_hud();
            }
        }) as Box<dyn FnMut(_)>)
    };

    // Hidden tabs get no frames; the first frame back must not see the gap.
    let document = window.document();
    let visibility_cb = {
        let session = session.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let hidden = document.as_ref().is_some_and(|d| d.hidden());
            let mut s = session.0.borrow_mut();
            if hidden {
                storage::save_garden(&s);
            } else {
                s.resync_clock();
            }
        }) as Box<dyn FnMut(_)>)
    };

    let resize_cb = {
        let apply_size = apply_size.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| apply_size()) as Box<dyn FnMut(_)>)
    };

    let autosave_tick = {
        let session = session.clone();
        Closure::wrap(Box::new(move || storage::save_garden(&session.0.borrow())) as Box<dyn FnMut()>)
    };
    let hud_tick = {
        let refresh_hud = refresh_hud.clone();
        Closure::wrap(Box::new(move || refresh_hud()) as Box<dyn FnMut()>)
    };

    listen(&canvas, "mousedown", mousedown_cb.as_ref().unchecked_ref());
    listen(&canvas, "mousemove", mousemove_cb.as_ref().unchecked_ref());
    listen(&canvas, "contextmenu", contextmenu_cb.as_ref().unchecked_ref());
    listen(&canvas, "touchstart", touch_start_cb.as_ref().unchecked_ref());
    listen(&canvas, "touchmove", touch_move_cb.as_ref().unchecked_ref());
    listen(&canvas, "touchend", touch_end_cb.as_ref().unchecked_ref());
    listen(&canvas, "touchcancel", touch_end_cb.as_ref().unchecked_ref());
    listen(&window, "mouseup", mouseup_cb.as_ref().unchecked_ref());
    listen(&window, "keydown", keydown_cb.as_ref().unchecked_ref());
    listen(&window, "resize", resize_cb.as_ref().unchecked_ref());
    if let Some(doc) = &document {
        listen(doc, "visibilitychange", visibility_cb.as_ref().unchecked_ref());
    }

    let autosave_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            autosave_tick.as_ref().unchecked_ref(),
            AUTOSAVE_MS,
        )
        .ok();
    let hud_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            hud_tick.as_ref().unchecked_ref(),
            HUD_REFRESH_MS,
        )
        .ok();

    // Cleanup
    Box::new(move || {
        alive.set(false);
        if let Some(id) = raf_id.get() {
            let _ = window.cancel_animation_frame(id);
        }
        frame_cell.borrow_mut().take();
        unlisten(&canvas, "mousedown", mousedown_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "mousemove", mousemove_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "contextmenu", contextmenu_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "touchstart", touch_start_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "touchmove", touch_move_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "touchend", touch_end_cb.as_ref().unchecked_ref());
        unlisten(&canvas, "touchcancel", touch_end_cb.as_ref().unchecked_ref());
        unlisten(&window, "mouseup", mouseup_cb.as_ref().unchecked_ref());
        unlisten(&window, "keydown", keydown_cb.as_ref().unchecked_ref());
        unlisten(&window, "resize", resize_cb.as_ref().unchecked_ref());
        if let Some(doc) = &document {
            unlisten(doc, "visibilitychange", visibility_cb.as_ref().unchecked_ref());
        }
        for id in [autosave_id, hud_id].into_iter().flatten() {
            window.clear_interval_with_handle(id);
        }
        storage::save_garden(&session.0.borrow());
        let _keep_alive = (
            &autosave_tick,
            &hud_tick,
            &mousedown_cb,
            &mousemove_cb,
            &mouseup_cb,
            &contextmenu_cb,
            &touch_start_cb,
            &touch_move_cb,
            &touch_end_cb,
            &keydown_cb,
            &resize_cb,
            &visibility_cb,
        );
    })
}

//! The 3D laptop: desktop gate, model loading, pointer wiring, and the
//! per-frame scene step.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent, Response, TouchEvent, WheelEvent};

use super::canvas::ScreenCanvas;
use super::page::App;
use super::render::{webgl2_context, SceneRenderer};
use super::{listen, listen_active, now_ms, window};
use crate::camera::Camera;
use crate::config::{InteractionMode, PortfolioConfig};
use crate::error::PortfolioError;
use crate::interaction::{InteractionController, PointerKind};
use crate::loader::load_first;
use crate::scene::{mesh_from_glb, Lights, MeshData, ModelTransform, ScreenPlane};
use crate::screen::ScreenFrame;

const CONTAINER_ID: &str = "laptopModel";

pub(crate) struct LaptopScene {
    renderer: SceneRenderer,
    camera: Camera,
    model: ModelTransform,
    controller: InteractionController,
    screen: ScreenCanvas,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    max_pixel_ratio: f64,
}

impl LaptopScene {
    /// Paint `frame` onto the screen canvas and push it to the GPU.
    pub(crate) fn upload_screen(&mut self, frame: &ScreenFrame) -> Result<(), JsValue> {
        self.screen.paint(frame)?;
        self.renderer.upload_screen(&self.screen.canvas)
    }

    pub(crate) fn step(&mut self, now: f64, animation_speed: f32, render: bool) {
        self.controller
            .update(now, animation_speed, &mut self.camera, &mut self.model);
        if render {
            self.renderer.render_frame(&self.camera, &self.model);
        }
    }

    fn resize(&mut self) {
        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        let dpr = web_sys::window()
            .map_or(1.0, |w| w.device_pixel_ratio())
            .min(self.max_pixel_ratio);
        let (px_w, px_h) = ((width * dpr) as u32, (height * dpr) as u32);
        self.canvas.set_width(px_w);
        self.canvas.set_height(px_h);
        self.camera.resize(width, height);
        self.renderer.resize(px_w, px_h);
        self.controller.resize(width as f32, height as f32);
        log::debug!("laptop canvas {width}x{height} @ {dpr}");
    }

    fn set_cursor(&self, cursor: &str) {
        if self.controller.mode() == InteractionMode::Manual {
            let _ = self.canvas.style().set_property("cursor", cursor);
        }
    }
}

/// Bring the 3D scene up inside `#laptopModel`, or leave a static panel there.
pub(crate) async fn init(app: Rc<RefCell<App>>, config: Rc<PortfolioConfig>) {
    if let Err(e) = try_init(&app, &config).await {
        log::error!("3D scene unavailable: {e:?}");
    }
}

async fn try_init(app: &Rc<RefCell<App>>, config: &PortfolioConfig) -> Result<(), JsValue> {
    let document = super::document()?;
    let Some(container) = document
        .get_element_by_id(CONTAINER_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("#{CONTAINER_ID} not found; skipping 3D scene");
        return Ok(());
    };

    let perf = &config.performance;
    let viewport = window()?.inner_width()?.as_f64().unwrap_or(0.0);
    if perf.disable_3d_on_mobile && viewport <= perf.mobile_screen_width {
        log::info!("viewport {viewport}px; showing static preview");
        show_placeholder(&container);
        return Ok(());
    }

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let gl = match webgl2_context(&canvas) {
        Ok(gl) => gl,
        Err(e) => {
            log::warn!("{e}");
            show_placeholder(&container);
            return Ok(());
        }
    };

    let loaded = match load_first(&config.model.sources, |url| fetch_model(url.to_owned())).await {
        Ok(loaded) => loaded,
        Err(e) => {
            show_load_failure(&container, &e)?;
            return Err(e.into());
        }
    };
    log::info!(
        "model ready from source {} after {} attempt(s): {} triangles",
        loaded.source_index + 1,
        loaded.attempts,
        loaded.value.triangle_count()
    );

    container.set_inner_html("");
    container.append_child(&canvas)?;
    let _ = canvas.style().set_property("display", "block");

    let renderer = SceneRenderer::new(gl, &loaded.value, ScreenPlane::default(), Lights::default())?;
    let camera = Camera::default();
    let controller = InteractionController::new(&config.interaction, &camera);
    let mut scene = LaptopScene {
        renderer,
        camera,
        model: ModelTransform::from_config(&config.model),
        controller,
        screen: ScreenCanvas::new(&document)?,
        canvas: canvas.clone(),
        container,
        max_pixel_ratio: perf.max_pixel_ratio,
    };
    scene.resize();
    scene.set_cursor("grab");

    {
        let mut app = app.borrow_mut();
        app.scene = Some(scene);
        app.presenter.invalidate();
    }

    wire_pointer(app, &canvas)?;
    let resize_app = app.clone();
    listen(&window()?, "resize", move |_: web_sys::Event| {
        with_scene(&resize_app, LaptopScene::resize);
    })?;
    Ok(())
}

async fn fetch_model(url: String) -> Result<MeshData, PortfolioError> {
    let win = window().map_err(js_error)?;
    let resp: Response = JsFuture::from(win.fetch_with_str(&url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !resp.ok() {
        return Err(PortfolioError::Dom(format!("{url}: HTTP {}", resp.status())));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    mesh_from_glb(&bytes)
}

fn js_error(e: JsValue) -> PortfolioError {
    PortfolioError::Dom(format!("{e:?}"))
}

fn with_scene(app: &Rc<RefCell<App>>, f: impl FnOnce(&mut LaptopScene)) {
    if let Some(scene) = app.borrow_mut().scene.as_mut() {
        f(scene);
    }
}

fn wire_pointer(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let a = app.clone();
    listen(canvas, "mousedown", move |e: MouseEvent| {
        let pan = e.button() == 2 || e.shift_key();
        with_scene(&a, |s| {
            s.controller
                .pointer_down(e.client_x() as f32, e.client_y() as f32, PointerKind::Mouse, pan);
            s.set_cursor("grabbing");
        });
    })?;

    let a = app.clone();
    listen(&window()?, "mousemove", move |e: MouseEvent| {
        with_scene(&a, |s| {
            s.controller.pointer_move(e.client_x() as f32, e.client_y() as f32)
        });
    })?;

    let a = app.clone();
    listen(&window()?, "mouseup", move |_: MouseEvent| {
        with_scene(&a, |s| {
            s.controller.pointer_up(now_ms());
            s.set_cursor("grab");
        });
    })?;

    let a = app.clone();
    listen(canvas, "mouseleave", move |_: MouseEvent| {
        with_scene(&a, |s| {
            s.controller.pointer_leave(now_ms());
            s.set_cursor("grab");
        });
    })?;

    let a = app.clone();
    listen(canvas, "wheel", move |e: WheelEvent| {
        e.prevent_default();
        with_scene(&a, |s| s.controller.wheel(e.delta_y() as f32));
    })?;

    let a = app.clone();
    listen(canvas, "dblclick", move |_: MouseEvent| {
        with_scene(&a, |s| s.controller.double_click(&s.camera, now_ms()));
    })?;

    listen(canvas, "contextmenu", |e: MouseEvent| e.prevent_default())?;

    let a = app.clone();
    listen(canvas, "touchstart", move |e: TouchEvent| {
        let Some(t) = e.touches().get(0) else {
            return;
        };
        with_scene(&a, |s| {
            s.controller
                .pointer_down(t.client_x() as f32, t.client_y() as f32, PointerKind::Touch, false)
        });
    })?;

    let a = app.clone();
    listen_active(canvas, "touchmove", move |e: TouchEvent| {
        let Some(t) = e.touches().get(0) else {
            return;
        };
        with_scene(&a, |s| {
            if s.controller.is_dragging() {
                e.prevent_default();
            }
            s.controller.pointer_move(t.client_x() as f32, t.client_y() as f32)
        });
    })?;

    let a = app.clone();
    listen(canvas, "touchend", move |_: TouchEvent| {
        with_scene(&a, |s| s.controller.touch_end(now_ms()));
    })
}

fn show_placeholder(container: &HtmlElement) {
    container.set_inner_html(
        "<div class=\"mobile-placeholder\">\
           <i class=\"fas fa-laptop-code\"></i>\
           <p>3D portfolio preview available on desktop</p>\
           <small>(WebGL required)</small>\
         </div>",
    );
}

fn show_load_failure(container: &HtmlElement, error: &PortfolioError) -> Result<(), JsValue> {
    container.set_inner_html(
        "<div class=\"fallback-content\"><div class=\"error-message\">\
           <i class=\"fas fa-exclamation-triangle\"></i>\
           <h3>3D Laptop Loading Issue</h3>\
           <p>Couldn't load the 3D model. This might be due to:</p>\
           <ul>\
             <li>Network connectivity issues</li>\
             <li>Browser WebGL support</li>\
             <li>Cached files preventing load</li>\
             <li class=\"specific-error\"></li>\
           </ul>\
           <div class=\"fallback-buttons\">\
             <button class=\"btn-primary retry\"><i class=\"fas fa-redo\"></i> Retry</button>\
             <button class=\"btn-secondary mobile-view\"><i class=\"fas fa-mobile-alt\"></i> Mobile View</button>\
           </div>\
           <small class=\"troubleshooting\">Troubleshooting: Try updating your browser, \
             enabling WebGL, or checking your internet connection.</small>\
         </div></div>",
    );
    if let Some(li) = container.query_selector(".specific-error")? {
        li.set_text_content(Some(&format!("Specific error: {error}")));
    }

    if let Some(retry) = container.query_selector(".retry")? {
        listen(&retry, "click", |_: MouseEvent| {
            if let Err(e) = window().and_then(|w| w.location().reload()) {
                log::error!("reload failed: {e:?}");
            }
        })?;
    }
    if let Some(mobile) = container.query_selector(".mobile-view")? {
        let target = container.clone();
        listen(&mobile, "click", move |_: MouseEvent| show_placeholder(&target))?;
    }
    Ok(())
}

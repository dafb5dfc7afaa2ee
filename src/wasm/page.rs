//! DOM wiring: section changes, theme toggle, contact form, overlay, and the
//! single animation-frame loop that drives everything else.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    VisibilityState,
};

use super::laptop::LaptopScene;
use super::storage::LocalStore;
use super::{listen, set_timeout, window};
use crate::config::{ContactMessages, PortfolioConfig};
use crate::contact::{self, FormError, MESSAGE_VISIBLE_MS, SIMULATED_SEND_MS};
use crate::presenter::Presenter;
use crate::scroll::{section_at, SectionBounds, SectionEmphasis};
use crate::theme::{Theme, ThemeController};

pub(crate) struct App {
    pub(crate) presenter: Presenter,
    screen_sections: Vec<HtmlElement>,
    overlay: Option<HtmlElement>,
    pub(crate) scene: Option<LaptopScene>,
}

impl App {
    pub(crate) fn new(document: &Document, config: &PortfolioConfig) -> Result<Self, JsValue> {
        let screen_sections = html_elements(document, ".screen-section")?;
        if screen_sections.is_empty() {
            log::warn!("no .screen-section elements; section emphasis disabled");
        }
        let overlay = document
            .query_selector(".performance-overlay")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Ok(Self {
            presenter: Presenter::new(config),
            screen_sections,
            overlay,
            scene: None,
        })
    }

    fn frame(&mut self, now: f64) {
        let report = self.presenter.frame(now);

        if let Some(emphasis) = &report.emphasis {
            apply_emphasis(&self.screen_sections, emphasis);
        }
        if let Some(active) = self.presenter.take_heading_entrance() {
            if let Some(section) = self.screen_sections.get(active) {
                play_heading_entrance(section);
            }
        }

        if let Some(fps) = report.fps {
            self.update_overlay(fps);
        }

        if let Some(scene) = self.scene.as_mut() {
            if let Some(frame) = self.presenter.screen_mut().take_upload() {
                if let Err(e) = scene.upload_screen(frame) {
                    log::warn!("screen texture upload failed: {e:?}");
                }
            }
            scene.step(now, self.presenter.stats().animation_speed(), report.render);
        }
    }

    fn update_overlay(&self, fps: u32) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        let section = self.presenter.scroll().active_index() + 1;
        let load = self.presenter.stats().load_label().unwrap_or_default();
        if let Ok(Some(stats)) = overlay.query_selector(".perf-stats") {
            stats.set_inner_html(&format!(
                "<span class=\"fps\">FPS: {fps}</span><br>\
                 <span class=\"load\">{load}</span><br>\
                 <span class=\"section\">Section: {section}</span>"
            ));
        }
        let _ = overlay
            .style()
            .set_property("background", self.presenter.stats().tier().background());
    }
}

fn apply_emphasis(sections: &[HtmlElement], emphasis: &[SectionEmphasis]) {
    for e in emphasis {
        let Some(el) = sections.get(e.index) else {
            continue;
        };
        let style = el.style();
        let _ = style.set_property("opacity", &e.opacity.to_string());
        let _ = style.set_property(
            "transform",
            &format!("translateY({}px) scale({})", e.offset_y, e.scale),
        );
    }
}

/// Restart the CSS entrance animation on the section's heading.
fn play_heading_entrance(section: &HtmlElement) {
    let Ok(Some(heading)) = section.query_selector("h1, h2") else {
        return;
    };
    let classes = heading.class_list();
    let _ = classes.remove_1("heading-enter");
    if let Some(h) = heading.dyn_ref::<HtmlElement>() {
        // reading layout forces a reflow so the animation restarts
        let _ = h.offset_width();
    }
    let _ = classes.add_1("heading-enter");
}

pub(crate) fn start_frame_loop(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::new(move |now: f64| {
        app.borrow_mut().frame(now);

        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = request_frame(cb) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    if let Some(cb) = g.borrow().as_ref() {
        request_frame(cb)?;
    }
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(cb.as_ref().unchecked_ref())
}

/// Hook every page-level event source up to `app`.
pub(crate) fn wire(app: &Rc<RefCell<App>>, config: &PortfolioConfig) -> Result<(), JsValue> {
    let document = super::document()?;

    wire_theme(&document, app)?;
    wire_navigation(&document, app)?;
    wire_scroll_detection(&document, app, config.scroll.detect_debounce_ms)?;
    wire_contact_form(&document, &config.contact)?;

    let visibility_app = app.clone();
    let doc = document.clone();
    listen(&document, "visibilitychange", move |_: Event| {
        let visible = doc.visibility_state() == VisibilityState::Visible;
        log::debug!("page visible: {visible}");
        visibility_app.borrow_mut().presenter.set_visible(visible);
    })?;

    change_section(&document, app, 0);
    if let Some(loading) = document.query_selector(".loading-screen")? {
        loading.class_list().add_1("hidden")?;
    }
    app.borrow_mut().presenter.mark_loaded(super::now_ms());
    play_hero_entrance(&document)?;
    Ok(())
}

/// Stagger the hero title, subtitle and buttons in once; the class comes off
/// when the last one finishes so later heading entrances can replay.
fn play_hero_entrance(document: &Document) -> Result<(), JsValue> {
    let Some(hero) = document.query_selector(".hero")? else {
        return Ok(());
    };
    hero.class_list().add_1("hero-enter")?;
    if let Some(last) = hero.query_selector(".hero-buttons")? {
        listen(&last, "animationend", move |_: Event| {
            let _ = hero.class_list().remove_1("hero-enter");
        })?;
    }
    Ok(())
}

fn change_section(document: &Document, app: &Rc<RefCell<App>>, index: usize) {
    let fill = app.borrow_mut().presenter.on_section_change(index);

    if let Ok(buttons) = elements(document, ".nav-button") {
        for button in buttons {
            let is_current = button
                .get_attribute("data-section")
                .and_then(|s| s.parse::<usize>().ok())
                == Some(index + 1);
            let _ = button.class_list().toggle_with_force("active", is_current);
        }
    }
    if let Ok(Some(bar)) = document.query_selector(".progress-fill") {
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            let _ = bar.style().set_property("width", &format!("{fill}%"));
        }
    }
    if let Ok(sections) = elements(document, ".section") {
        for (i, section) in sections.iter().enumerate() {
            let _ = section.class_list().toggle_with_force("in-view", i == index);
        }
    }
}

fn wire_theme(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let prefers_dark = window()?
        .match_media("(prefers-color-scheme: dark)")?
        .is_some_and(|m| m.matches());
    let mut controller = ThemeController::init(LocalStore::open(), prefers_dark);

    let toggle = document.get_element_by_id("darkModeToggle");
    apply_theme(document, controller.current(), toggle.as_ref());

    let Some(toggle) = toggle else {
        log::warn!("dark mode toggle element not found");
        return Ok(());
    };
    let app = app.clone();
    let doc = document.clone();
    let button = toggle.clone();
    listen(&toggle, "click", move |_: Event| {
        let theme = controller.toggle();
        apply_theme(&doc, theme, Some(&button));
        app.borrow_mut().presenter.invalidate();
        log::info!("theme -> {theme}");
    })
}

fn apply_theme(document: &Document, theme: Theme, toggle: Option<&Element>) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property("background-color", theme.background());
    }
    if let Some(toggle) = toggle {
        toggle.set_inner_html(&format!("<i class=\"fas {}\"></i>", theme.toggle_icon()));
    }
}

fn wire_navigation(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    for button in elements(document, ".nav-button")? {
        let Some(index) = button
            .get_attribute("data-section")
            .and_then(|s| s.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
        else {
            continue;
        };
        let app = app.clone();
        let doc = document.clone();
        listen(&button, "click", move |e: Event| {
            e.prevent_default();
            if let Ok(sections) = elements(&doc, ".section") {
                if let Some(section) = sections.get(index) {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    section.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            change_section(&doc, &app, index);
        })?;
    }
    Ok(())
}

/// Detect the section under the viewport midpoint once scrolling pauses.
fn wire_scroll_detection(
    document: &Document,
    app: &Rc<RefCell<App>>,
    debounce_ms: i32,
) -> Result<(), JsValue> {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let last: Rc<Cell<usize>> = Rc::new(Cell::new(0));
    let app = app.clone();
    let doc = document.clone();
    listen(&window()?, "scroll", move |_: Event| {
        let Ok(win) = window() else {
            return;
        };
        if let Some(handle) = pending.take() {
            win.clear_timeout_with_handle(handle);
        }
        let app = app.clone();
        let doc = doc.clone();
        let last = last.clone();
        let pending_inner = pending.clone();
        let scheduled = set_timeout(debounce_ms, move || {
            pending_inner.set(None);
            let Some(index) = detect_section(&doc) else {
                return;
            };
            if index != last.get() {
                last.set(index);
                change_section(&doc, &app, index);
            }
        });
        match scheduled {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("scroll debounce failed: {e:?}"),
        }
    })
}

fn detect_section(document: &Document) -> Option<usize> {
    let win = window().ok()?;
    let scroll_y = win.scroll_y().ok()?;
    let viewport = win.inner_height().ok()?.as_f64()?;
    let bounds: Vec<SectionBounds> = html_elements(document, ".section")
        .ok()?
        .iter()
        .map(|s| SectionBounds {
            top: f64::from(s.offset_top()),
            height: f64::from(s.offset_height()),
        })
        .collect();
    section_at(scroll_y, viewport, &bounds)
}

fn wire_contact_form(document: &Document, messages: &ContactMessages) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id("contactForm") else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;
    let messages = messages.clone();
    let doc = document.clone();
    let target = form.clone();
    listen(&target, "submit", move |e: Event| {
        e.prevent_default();
        let name = field_value(&form, "input[type=\"text\"]");
        let email = field_value(&form, "input[type=\"email\"]");
        let message = field_value(&form, "textarea");

        let result = match contact::validate(&name, &email, &message) {
            Err(FormError::MissingFields) => show_form_message(&doc, &messages.missing_fields, "error"),
            Err(FormError::InvalidEmail) => show_form_message(&doc, &messages.invalid_email, "error"),
            Ok(()) => simulate_send(&doc, &form, &messages.success),
        };
        if let Err(e) = result {
            log::warn!("contact form: {e:?}");
        }
    })
}

fn field_value(form: &HtmlFormElement, selector: &str) -> String {
    let Ok(Some(el)) = form.query_selector(selector) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn simulate_send(document: &Document, form: &HtmlFormElement, success: &str) -> Result<(), JsValue> {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
    else {
        show_form_message(document, success, "success")?;
        form.reset();
        return Ok(());
    };
    button.set_disabled(true);
    button.set_text_content(Some("Sending..."));

    let doc = document.clone();
    let form = form.clone();
    let success = success.to_owned();
    set_timeout(SIMULATED_SEND_MS, move || {
        if let Err(e) = show_form_message(&doc, &success, "success") {
            log::warn!("contact form: {e:?}");
        }
        form.reset();
        button.set_disabled(false);
        button.set_text_content(Some("Send Message"));
    })?;
    Ok(())
}

/// Slide a toast in from the right and remove it again after a few seconds.
fn show_form_message(document: &Document, text: &str, kind: &str) -> Result<(), JsValue> {
    if let Some(existing) = document.query_selector(".form-message")? {
        existing.remove();
    }
    let body = document.body().ok_or("no body")?;
    let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
    toast.set_class_name(&format!("form-message {kind}"));
    toast.set_text_content(Some(text));
    let _ = body.append_child(&toast)?;

    let slide_in = toast.clone();
    set_timeout(100, move || {
        let _ = slide_in.style().set_property("transform", "translateX(0)");
    })?;
    set_timeout(MESSAGE_VISIBLE_MS, move || {
        let _ = toast.style().set_property("transform", "translateX(100%)");
        let _ = set_timeout(300, move || toast.remove());
    })?;
    Ok(())
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

fn html_elements(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(elements(document, selector)?
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect())
}

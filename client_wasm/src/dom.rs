//! DOM-backed sinks
//!
//! Every element is positioned absolutely inside the stage, so moving
//! something is a single style write.

use game_core::{BirdSink, LayerSink, Obstacle, ObstacleSink, Overlay, PipeRole, Screen, WingFrame};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Look up an element by id
pub fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::warn!("Failed to set {}: {:?}", name, e);
    }
}

fn px(value: impl std::fmt::Display) -> String {
    format!("{}px", value)
}

/// Sky or land strip
pub struct DomLayer {
    el: HtmlElement,
}

impl DomLayer {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }
}

impl LayerSink for DomLayer {
    fn set_offset(&mut self, left: i32) {
        set_style(&self.el, "left", &px(left));
    }
}

pub struct DomBird {
    el: HtmlElement,
}

impl DomBird {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }
}

impl BirdSink for DomBird {
    fn set_top(&mut self, top: f64) {
        set_style(&self.el, "top", &px(top));
    }

    fn set_wing(&mut self, frame: WingFrame) {
        let (x, y) = frame.sprite_offset();
        set_style(
            &self.el,
            "background-position",
            &format!("{} {}", px(x), px(y)),
        );
    }
}

/// Pipe elements keyed by obstacle id
pub struct DomPipes {
    document: Document,
    stage: HtmlElement,
    elements: HashMap<u64, HtmlElement>,
}

impl DomPipes {
    pub fn new(document: Document, stage: HtmlElement) -> Self {
        Self {
            document,
            stage,
            elements: HashMap::new(),
        }
    }

    fn build(&self, obstacle: &Obstacle) -> Result<HtmlElement, JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("div is not an HTML element"))?;
        el.set_class_name(match obstacle.role {
            PipeRole::Upper => "pipeup",
            PipeRole::Lower => "pipedown",
        });
        set_style(&el, "top", &px(obstacle.top));
        set_style(&el, "height", &px(obstacle.height));
        set_style(&el, "left", &px(obstacle.left));
        self.stage.append_child(&el)?;
        Ok(el)
    }
}

impl ObstacleSink for DomPipes {
    fn create(&mut self, obstacle: &Obstacle) {
        match self.build(obstacle) {
            Ok(el) => {
                self.elements.insert(obstacle.id, el);
            }
            Err(e) => log::error!("Failed to create pipe {}: {:?}", obstacle.id, e),
        }
    }

    fn move_to(&mut self, id: u64, left: i32) {
        if let Some(el) = self.elements.get(&id) {
            set_style(el, "left", &px(left));
        }
    }

    fn destroy(&mut self, id: u64) {
        if let Some(el) = self.elements.remove(&id) {
            el.remove();
        }
    }
}

/// Start menu plus the shared pause / game-over panel
pub struct DomOverlay {
    document: Document,
    menu: HtmlElement,
    panel: HtmlElement,
}

impl DomOverlay {
    pub fn new(document: Document, menu: HtmlElement, panel: HtmlElement) -> Self {
        Self {
            document,
            menu,
            panel,
        }
    }

    fn fill_panel(&self, screen: &Screen) -> Result<(), JsValue> {
        self.panel.set_inner_html("");
        let lines = screen.lines();
        let last = lines.len().saturating_sub(1);
        let taunting = matches!(screen, Screen::Over { taunt: Some(_), .. });

        for (i, line) in lines.iter().enumerate() {
            let tag = if i == 0 { "h1" } else { "h2" };
            let el = self.document.create_element(tag)?;
            if taunting && i == last {
                el.set_class_name("taunt");
            }
            el.set_text_content(Some(line.as_str()));
            self.panel.append_child(&el)?;
        }
        Ok(())
    }
}

impl Overlay for DomOverlay {
    fn show(&mut self, screen: &Screen) {
        match screen {
            Screen::Menu => {
                set_style(&self.panel, "display", "none");
                set_style(&self.menu, "display", "block");
            }
            _ => {
                if let Err(e) = self.fill_panel(screen) {
                    log::error!("Failed to render overlay: {:?}", e);
                }
                set_style(&self.menu, "display", "none");
                set_style(&self.panel, "display", "block");
            }
        }
    }

    fn hide(&mut self) {
        set_style(&self.menu, "display", "none");
        set_style(&self.panel, "display", "none");
    }
}

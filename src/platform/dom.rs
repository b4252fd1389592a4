//! Widget DOM
//!
//! Builds the element tree once on mount and updates it from a [`Screen`]
//! after every state change. Exactly one of the start overlay, the playing
//! layer (HUD + target) and the game-over overlay is visible at a time.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::ui::{GAME_OVER_TITLE, NEW_HIGH_SCORE, PLAY_AGAIN_LABEL, Screen};

const STYLESHEET: &str = include_str!("widget.css");
const HIDDEN: &str = "isy-hidden";

/// Clickable parts of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Target,
    PlayAgain,
}

/// Handles to every element the widget updates
pub struct WidgetDom {
    style: Element,
    root: HtmlElement,

    start: HtmlElement,
    title: HtmlElement,
    instructions: [HtmlElement; 2],
    start_btn: HtmlElement,

    playing: HtmlElement,
    score_value: HtmlElement,
    best_value: HtmlElement,
    time_value: HtmlElement,
    target: HtmlElement,

    game_over: HtmlElement,
    final_score: HtmlElement,
    new_high: HtmlElement,
    commentary: HtmlElement,
    play_again_btn: HtmlElement,

    listeners: Vec<(HtmlElement, Closure<dyn FnMut(MouseEvent)>)>,
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element(tag)?.dyn_into()?;
    el.set_class_name(class);
    Ok(el)
}

fn text(document: &Document, tag: &str, class: &str, content: &str) -> Result<HtmlElement, JsValue> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

fn set_visible(el: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(HIDDEN, !visible)?;
    Ok(())
}

/// HUD card: small label over a big value. Returns (card, value).
fn card(document: &Document, label: &str) -> Result<(HtmlElement, HtmlElement), JsValue> {
    let card = create(document, "div", "isy-card")?;
    card.append_child(&text(document, "div", "isy-label", label)?)?;
    let value = text(document, "div", "isy-value", "0")?;
    card.append_child(&value)?;
    Ok((card, value))
}

impl WidgetDom {
    /// Build the widget under `host` and inject its stylesheet
    pub fn build(document: &Document, host: &Element) -> Result<Self, JsValue> {
        let style = document.create_element("style")?;
        style.set_text_content(Some(STYLESHEET));
        match document.head() {
            Some(head) => head.append_child(&style)?,
            None => host.append_child(&style)?,
        };

        let root = create(document, "div", "isy-root")?;
        root.append_child(&create(document, "div", "isy-grid")?)?;

        // Start overlay
        let start = create(document, "div", "isy-overlay")?;
        let panel = create(document, "div", "isy-panel")?;
        let title = create(document, "h1", "isy-title")?;
        let body = create(document, "p", "isy-instructions")?;
        let instructions = [create(document, "span", "")?, create(document, "span", "")?];
        body.append_child(&instructions[0])?;
        body.append_child(&document.create_element("br")?)?;
        body.append_child(&instructions[1])?;
        let start_btn = create(document, "button", "isy-button isy-button-large")?;
        panel.append_child(&title)?;
        panel.append_child(&body)?;
        panel.append_child(&start_btn)?;
        start.append_child(&panel)?;
        root.append_child(&start)?;

        // Playing layer
        let playing = create(document, "div", "isy-playing")?;
        let left = create(document, "div", "isy-hud isy-hud-left")?;
        let (score_card, score_value) = card(document, "Score")?;
        let (best_card, best_value) = card(document, "Best")?;
        left.append_child(&score_card)?;
        left.append_child(&best_card)?;
        let (time_card, time_value) = card(document, "Time")?;
        time_card.class_list().add_2("isy-hud", "isy-hud-right")?;
        playing.append_child(&left)?;
        playing.append_child(&time_card)?;

        let target = create(document, "div", "isy-target")?;
        target.append_child(&create(document, "div", "isy-ping")?)?;
        let face = create(document, "div", "isy-face")?;
        let outer = create(document, "div", "isy-ring isy-ring-outer")?;
        let inner = create(document, "div", "isy-ring isy-ring-inner")?;
        inner.append_child(&create(document, "div", "isy-dot")?)?;
        outer.append_child(&inner)?;
        face.append_child(&outer)?;
        target.append_child(&face)?;
        playing.append_child(&target)?;
        root.append_child(&playing)?;

        // Game over overlay
        let game_over = create(document, "div", "isy-overlay isy-dim")?;
        let panel = create(document, "div", "isy-panel")?;
        panel.append_child(&text(document, "h2", "isy-title isy-title-small", GAME_OVER_TITLE)?)?;
        let stats = create(document, "div", "isy-stats")?;
        let final_score = create(document, "p", "isy-final")?;
        let new_high = text(document, "p", "isy-new-high", NEW_HIGH_SCORE)?;
        let commentary = create(document, "p", "isy-commentary")?;
        stats.append_child(&final_score)?;
        stats.append_child(&new_high)?;
        stats.append_child(&commentary)?;
        let play_again_btn = text(document, "button", "isy-button", PLAY_AGAIN_LABEL)?;
        panel.append_child(&stats)?;
        panel.append_child(&play_again_btn)?;
        game_over.append_child(&panel)?;
        root.append_child(&game_over)?;

        host.append_child(&root)?;

        Ok(Self {
            style,
            root,
            start,
            title,
            instructions,
            start_btn,
            playing,
            score_value,
            best_value,
            time_value,
            target,
            game_over,
            final_score,
            new_high,
            commentary,
            play_again_btn,
            listeners: Vec::new(),
        })
    }

    /// Call `handler` whenever `control` is clicked, until the widget is removed
    pub fn on_click<F>(&mut self, control: Control, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let el = match control {
            Control::Start => self.start_btn.clone(),
            Control::Target => self.target.clone(),
            Control::PlayAgain => self.play_again_btn.clone(),
        };
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.listeners.push((el, closure));
        Ok(())
    }

    /// Show `screen`, hiding the other two
    pub fn render(&self, screen: &Screen) -> Result<(), JsValue> {
        set_visible(&self.start, matches!(screen, Screen::Start(_)))?;
        set_visible(&self.playing, matches!(screen, Screen::Playing(_)))?;
        set_visible(&self.game_over, matches!(screen, Screen::GameOver(_)))?;

        match screen {
            Screen::Start(v) => {
                self.title.set_text_content(Some(v.title));
                for (el, line) in self.instructions.iter().zip(v.instructions.iter()) {
                    el.set_text_content(Some(line));
                }
                self.start_btn.set_text_content(Some(v.button));
            }
            Screen::Playing(v) => {
                self.score_value.set_text_content(Some(&v.score.to_string()));
                self.best_value.set_text_content(Some(&v.best.to_string()));
                self.time_value.set_text_content(Some(&v.time));

                let style = self.target.style();
                style.set_property("left", &format!("{}px", v.target.left))?;
                style.set_property("top", &format!("{}px", v.target.top))?;
                style.set_property("width", &format!("{}px", v.target.size))?;
                style.set_property("height", &format!("{}px", v.target.size))?;
            }
            Screen::GameOver(v) => {
                self.final_score.set_text_content(Some(&v.final_score_text()));
                set_visible(&self.new_high, v.new_high_score)?;
                self.commentary.set_text_content(Some(v.commentary.message()));
            }
        }
        Ok(())
    }

    /// Detach listeners and take the widget out of the page
    pub fn remove(&mut self) {
        for (el, closure) in self.listeners.drain(..) {
            if let Err(e) =
                el.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach click listener: {:?}", e);
            }
        }
        self.root.remove();
        self.style.remove();
    }
}

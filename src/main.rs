//! I See You entry point
//!
//! Mounts the widget in the browser, or plays a scripted headless session on
//! native targets.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use i_see_you::Tuning;
    use i_see_you::platform::dom::Control;
    use i_see_you::platform::{self, Countdown, WidgetDom};
    use i_see_you::sim::{
        CountdownAction, GameEvent, GameInput, GameState, countdown_action, release_action, step,
    };
    use i_see_you::ui::view;

    /// Host element id; falls back to <body> when the page has none
    const HOST_ID: &str = "i-see-you";

    /// Widget instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        dom: WidgetDom,
        /// Interval for the running countdown, only while playing
        countdown: Option<Countdown>,
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("I See You starting...");
        mount()
    }

    pub fn mount() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let host: Element = match document.get_element_by_id(HOST_ID) {
            Some(el) => el,
            None => document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .into(),
        };

        let tuning = Tuning::load(&host);
        let seed = platform::clock_seed();
        let dom = WidgetDom::build(&document, &host)?;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning),
            rng: Pcg32::seed_from_u64(seed),
            dom,
            countdown: None,
        }));

        for (control, input) in [
            (Control::Start, GameInput::Start),
            (Control::Target, GameInput::HitTarget),
            (Control::PlayAgain, GameInput::PlayAgain),
        ] {
            let weak = Rc::downgrade(&game);
            game.borrow_mut()
                .dom
                .on_click(control, move |_event: web_sys::MouseEvent| {
                    if let Some(game) = weak.upgrade() {
                        dispatch(&game, input);
                    }
                })?;
        }

        {
            let g = game.borrow();
            g.dom.render(&view(&g.state))?;
        }

        // Only one widget per page
        let previous = MOUNTED.with(|m| m.borrow_mut().replace(game));
        if let Some(previous) = previous {
            teardown(&previous);
        }

        log::info!("Widget mounted (seed {})", seed);
        Ok(())
    }

    pub fn unmount() {
        let game = MOUNTED.with(|m| m.borrow_mut().take());
        match game {
            Some(game) => teardown(&game),
            None => log::warn!("unmount called with no widget mounted"),
        }
    }

    fn teardown(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if release_action(g.countdown.as_ref().map(Countdown::id)) == CountdownAction::Clear {
            g.countdown = None;
        }
        g.dom.remove();
        log::info!("Widget unmounted after {} episodes", g.state.episode);
    }

    /// Run one input through the state machine, then re-render and resync the timer
    fn dispatch(game: &Rc<RefCell<Game>>, input: GameInput) {
        let mut guard = game.borrow_mut();
        let g = &mut *guard;

        let events = step(&mut g.state, input, platform::viewport(), &mut g.rng);
        for event in &events {
            if let GameEvent::HighScoreBeaten { high_score } = event {
                log::debug!("New session best: {}", high_score);
            }
        }

        if let Err(e) = g.dom.render(&view(&g.state)) {
            log::error!("Render failed: {:?}", e);
        }

        sync_countdown(g, Rc::downgrade(game));
    }

    /// Keep exactly one interval alive for the current countdown, none outside play
    fn sync_countdown(g: &mut Game, game: Weak<RefCell<Game>>) {
        let armed = g.countdown.as_ref().map(Countdown::id);
        match countdown_action(&g.state, armed) {
            CountdownAction::Keep => {}
            CountdownAction::Clear => g.countdown = None,
            CountdownAction::Arm(id) => {
                // Clear the superseded interval before the new one starts
                g.countdown = None;
                let armed = Countdown::arm(id, g.state.tuning.tick_ms, move || {
                    if let Some(game) = game.upgrade() {
                        dispatch(&game, GameInput::Tick { countdown: id });
                    }
                });
                match armed {
                    Ok(countdown) => g.countdown = Some(countdown),
                    Err(e) => log::error!("Failed to start countdown: {:?}", e),
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Mount the widget again after `unmount`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    wasm_game::mount()
}

/// Remove the widget and stop its countdown
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_game::unmount();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use i_see_you::platform;
    use i_see_you::sim::{GameEvent, GameInput, GameState, step};
    use i_see_you::ui::{Screen, view};

    /// Hits landed in each scripted episode
    const EPISODE_HITS: [u32; 3] = [12, 25, 16];

    /// Play a scripted session and return the final state
    pub fn play_session(seed: u64) -> GameState {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::default();
        let viewport = platform::viewport();

        for (i, &hits) in EPISODE_HITS.iter().enumerate() {
            let input = if i == 0 {
                GameInput::Start
            } else {
                GameInput::PlayAgain
            };
            step(&mut state, input, viewport, &mut rng);

            for n in 0..hits {
                // Dawdle a little, but never long enough to lose
                let waits = n % state.tuning.round_seconds;
                for _ in 0..waits {
                    let countdown = state.countdown;
                    step(&mut state, GameInput::Tick { countdown }, viewport, &mut rng);
                }
                step(&mut state, GameInput::HitTarget, viewport, &mut rng);
            }

            // Stop clicking and let the clock run out
            while state.is_playing() {
                let countdown = state.countdown;
                for event in step(&mut state, GameInput::Tick { countdown }, viewport, &mut rng) {
                    if let GameEvent::GameOver { final_score, .. } = event {
                        log::info!(
                            "Episode {} over at {} (target size {})",
                            state.episode,
                            final_score,
                            state.target_size()
                        );
                    }
                }
            }

            if let Screen::GameOver(over) = view(&state) {
                log::info!(
                    "{} | {}{}",
                    over.final_score_text(),
                    over.commentary.message(),
                    if over.new_high_score { " | New High Score!" } else { "" }
                );
            }
        }

        state
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("I See You (native) starting...");
    log::info!("The widget needs a browser - run with `trunk serve` for the web version");

    let seed = i_see_you::platform::clock_seed();
    log::info!("Headless session with seed: {}", seed);
    let state = headless::play_session(seed);

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
    println!("\nSession best: {}", state.high_score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

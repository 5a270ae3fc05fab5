//! Math Rush entry point
//!
//! Handles browser initialization and wires DOM events into the game session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};

    use math_rush::audio::AudioManager;
    use math_rush::consts::{QUESTION_SECONDS, TIMER_INTERVAL_MS};
    use math_rush::game::{GamePhase, GameSession};
    use math_rush::platform::time::Interval;
    use math_rush::settings::Settings;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        audio: AudioManager,
        settings: Settings,
        /// Countdown for the current question; replaced on every new question
        timer: Option<Interval>,
        /// Generation the current countdown was armed for
        timer_generation: u64,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                session: GameSession::new(seed),
                audio: AudioManager::new(&settings),
                settings,
                timer: None,
                timer_generation: 0,
            }
        }

        /// Repaint score, lives, countdown, question and the game-over panel
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.score().to_string()));
            }

            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&"\u{2764}".repeat(self.session.lives() as usize)));
            }

            if let Some(el) = document.get_element_by_id("hud-timer") {
                el.set_text_content(Some(&format!("Time left: {}s", self.session.timer())));
            }

            if let Some(el) = document.get_element_by_id("timer-bar") {
                let percent = self.session.timer() as f32 / QUESTION_SECONDS as f32 * 100.0;
                let _ = el.set_attribute("style", &format!("width: {percent:.0}%"));
            }

            if let Some(el) = document.get_element_by_id("question") {
                let text = self.session.question().map(|q| q.text.as_str()).unwrap_or("");
                el.set_text_content(Some(text));
            }

            if let Some(el) = document.get_element_by_id("mute-btn") {
                let icon = if self.audio.is_muted() { "\u{1F507}" } else { "\u{1F50A}" };
                el.set_text_content(Some(icon));
            }

            // Swap the quiz card and game-over panel on phase changes
            if let Some(el) = document.get_element_by_id("quiz-card") {
                if self.session.phase() == GamePhase::Playing {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.session.phase() == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.session.score().to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Math Rush starting...");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Session seed: {}", seed);

        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        {
            let mut g = game.borrow_mut();
            g.session.start();
            g.audio.play_background();
        }

        setup_answer_input(game.clone());
        setup_mute_button(game.clone());
        setup_restart_button(game.clone());
        setup_unmount(game.clone());

        sync(&game);

        log::info!("Math Rush running!");
    }

    /// Apply side effects after a batch of transitions: play queued cues,
    /// re-arm or drop the countdown, then repaint the HUD.
    fn sync(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();

        for cue in g.session.drain_cues() {
            g.audio.play(cue.into());
        }

        match g.session.phase() {
            GamePhase::Playing => {
                let generation = g.session.generation();
                if g.timer.is_none() || g.timer_generation != generation {
                    g.timer = arm_countdown(game.clone());
                    g.timer_generation = generation;
                }
            }
            _ => g.timer = None,
        }

        g.update_hud();
    }

    /// Install a fresh 1 Hz countdown. The previous handle must already be
    /// dropped or about to be replaced by the caller.
    fn arm_countdown(game: Rc<RefCell<Game>>) -> Option<Interval> {
        Interval::new(TIMER_INTERVAL_MS, move || {
            game.borrow_mut().session.tick();
            sync(&game);
        })
    }

    fn setup_answer_input(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let Some(input) = document.get_element_by_id("answer-input") else {
            log::error!("No #answer-input element");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let Some(field) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let answer = field.value();
            field.set_value("");

            game.borrow_mut().session.submit_answer(&answer);
            sync(&game);
        });
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_mute_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("mute-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    let muted = g.audio.toggle_mute();
                    g.settings.muted = muted;
                    g.settings.save();
                }
                sync(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    g.session.start();
                    g.audio.play_background();
                }
                sync(&game);
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Leaving the page stops all playback and the countdown
    fn setup_unmount(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            g.timer = None;
            g.audio.stop_all();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Math Rush (native) starting...");
    log::info!("Native mode has no UI - build for wasm32 and serve the web version");

    // Run a scripted session
    println!("\nRunning session smoke test...");
    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use math_rush::game::{GamePhase, GameSession};

    let mut session = GameSession::new(42);
    session.start();

    // Answer five questions correctly, then fail out
    for _ in 0..5 {
        let answer = session
            .question()
            .expect("question while playing")
            .answer
            .clone();
        session.submit_answer(&answer);
    }
    while session.phase() == GamePhase::Playing {
        session.submit_answer("");
    }

    assert_eq!(session.score(), 5);
    assert_eq!(session.lives(), 0);
    println!("✓ Session smoke test passed (score 5, out of lives)");
}

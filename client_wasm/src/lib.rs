//! Canvas 2D client for the side-scroller
//!
//! The page calls `start_game(canvas)` once, then `render_frame()` from its
//! `requestAnimationFrame` loop.
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod logging;
mod surface;

use game_core::{Config, Game, GameRng};
use input::KeyEdge;
use logging::{console_error, console_log};
use std::cell::RefCell;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
pub struct Client {
    game: Game,
    surface: CanvasSurface,
}

impl Client {
    /// Bind the canvas, seed the game and wire keyboard input
    pub fn new(canvas: &HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let config = Config::new();
        let surface = CanvasSurface::new(
            canvas,
            config.surface_width as u32,
            config.surface_height as u32,
        )?;

        input::focus_canvas(canvas)?;
        input::attach_keyboard(canvas, |edge, key| {
            let handled = with_client(|client| match edge {
                KeyEdge::Down => client.game.key_down(key),
                KeyEdge::Up => client.game.key_up(key),
            });
            if let Err(e) = handled {
                console_error!("Key {:?} {} dropped: {:?}", edge, key, e);
            }
        })?;

        Ok(Self {
            game: Game::new(config, GameRng::new(seed)),
            surface,
        })
    }

    /// One animation frame
    pub fn render(&mut self) {
        self.game.render(&mut self.surface);
    }
}

thread_local! {
    // Global client storage for WASM bindings
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
    CLIENT.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("Client is busy"))?;
        match slot.as_mut() {
            Some(client) => Ok(f(client)),
            None => Err(JsValue::from_str("Client not initialized")),
        }
    })
}

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let seed = js_sys::Date::now() as u64;
    let client = Client::new(&canvas, seed)?;
    let config = client.game.config();
    console_log!(
        "Game started: {}x{} surface, seed {}",
        config.surface_width,
        config.surface_height,
        seed
    );

    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.render())
}

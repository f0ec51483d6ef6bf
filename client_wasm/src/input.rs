//! Keyboard input handling

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

/// Which edge of a key stroke an event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

impl KeyEdge {
    fn event_name(self) -> &'static str {
        match self {
            KeyEdge::Down => "keydown",
            KeyEdge::Up => "keyup",
        }
    }
}

/// Make the canvas focusable and focus it so it receives key events
pub fn focus_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.set_tab_index(0);
    canvas.focus()
}

/// Forward keydown/keyup on the canvas to `handler` as (edge, key)
pub fn attach_keyboard<F>(canvas: &HtmlCanvasElement, handler: F) -> Result<(), JsValue>
where
    F: Fn(KeyEdge, &str) + Clone + 'static,
{
    for edge in [KeyEdge::Down, KeyEdge::Up] {
        let handler = handler.clone();
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handler(edge, &event.key());
        });
        canvas.add_event_listener_with_callback(
            edge.event_name(),
            closure.as_ref().unchecked_ref(),
        )?;
        // Listeners live as long as the page
        closure.forget();
    }
    Ok(())
}

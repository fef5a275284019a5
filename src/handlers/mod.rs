//! Event Handlers
//!
//! - keyboard: key presses to commands
//! - pointer: mouse hover/click and bracketed paste (the drop zone)
//! - api: API responses from the background service
//!
//! Input handlers are pure: they read the model and return commands for
//! `App::dispatch`.

pub mod api;
pub mod keyboard;
pub mod pointer;

use crossterm::event::Event;

use crate::messages::Command;
use crate::model::Model;

pub use api::handle_api_response;
pub use keyboard::map_key;
pub use pointer::{map_mouse, map_paste};

/// Translate any terminal event into commands
pub fn map_event(model: &Model, event: Event) -> Vec<Command> {
    match event {
        Event::Key(key) => map_key(model, key),
        Event::Mouse(mouse) => map_mouse(model, mouse),
        Event::Paste(text) => map_paste(model, text),
        _ => Vec::new(),
    }
}

//! Browser facade. Cells and players cross the boundary as `u8`
//! (0 = empty, 1 = black, 2 = white); structured values go through
//! `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::observer::EventLog;
use crate::session::ReversiSession;
use crate::types::{Cell, Player};

pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

#[wasm_bindgen]
pub struct WasmReversi {
    session: ReversiSession,
    events: EventLog,
}

#[wasm_bindgen]
impl WasmReversi {
    /// `config_toml` may be empty for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: &str) -> Result<WasmReversi, JsError> {
        let config = EngineConfig::from_toml_str(config_toml).map_err(to_js_error)?;
        let mut session = ReversiSession::new(config).map_err(to_js_error)?;
        let events = EventLog::new();
        session.subscribe(Box::new(events.clone()));
        Ok(Self { session, events })
    }

    pub fn size(&self) -> usize {
        self.session.engine().size()
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), JsError> {
        self.session.configure_size(size).map_err(to_js_error)
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn reset(&mut self) {
        self.session.restart();
    }

    pub fn current_player(&self) -> u8 {
        player_to_u8(self.session.engine().current_player())
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<u8, JsError> {
        let cell = self.session.engine().get_cell(x, y).map_err(to_js_error)?;
        Ok(cell_to_u8(cell))
    }

    /// Row-major cells as `u8`.
    pub fn cells(&self) -> Vec<u8> {
        self.session
            .engine()
            .cells()
            .iter()
            .map(|&c| cell_to_u8(c))
            .collect()
    }

    /// `{ success, flipped }`.
    pub fn try_place_at(&mut self, x: i32, y: i32, simulate: bool) -> Result<JsValue, JsError> {
        let result = self.session.engine_mut().try_place_at(x, y, simulate);
        to_js(&result)
    }

    /// `[{ x, y }, ...]` in row-major order.
    pub fn valid_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.engine().valid_moves())
    }

    pub fn has_any_valid_move(&self, player: u8) -> Result<bool, JsError> {
        Ok(self.session.engine().has_any_valid_move(player_from_u8(player)?))
    }

    /// `{ black, white }`.
    pub fn score(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.engine().score())
    }

    /// `{ is_over, both_no_moves }`.
    pub fn is_game_over(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.engine().is_game_over())
    }

    pub fn play_ai_move(&mut self, player: u8) -> Result<bool, JsError> {
        let player = player_from_u8(player)?;
        Ok(self.session.play_ai(player))
    }

    pub fn status(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.engine().status())
    }

    pub fn outcome(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.engine().outcome())
    }

    /// Notifications since the last call, oldest first:
    /// `{ kind: "board_changed" }` or `{ kind: "game_over", both_no_moves }`.
    pub fn drain_events(&self) -> Result<JsValue, JsError> {
        to_js(&self.events.drain())
    }
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js_error(err: crate::error::EngineError) -> JsError {
    JsError::new(&err.to_string())
}

fn player_from_u8(value: u8) -> Result<Player, JsError> {
    match value {
        PLAYER_BLACK => Ok(Player::Black),
        PLAYER_WHITE => Ok(Player::White),
        other => Err(JsError::new(&format!("invalid player value: {other}"))),
    }
}

fn player_to_u8(player: Player) -> u8 {
    match player {
        Player::Black => PLAYER_BLACK,
        Player::White => PLAYER_WHITE,
    }
}

fn cell_to_u8(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Black => PLAYER_BLACK,
        Cell::White => PLAYER_WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_codes_round_trip() {
        assert_eq!(player_to_u8(Player::Black), 1);
        assert_eq!(player_to_u8(Player::White), 2);
        assert_eq!(cell_to_u8(Cell::Empty), 0);
        assert_eq!(cell_to_u8(Cell::White), 2);
    }
}

#![cfg(target_arch = "wasm32")]

use reversi_engine::wasm::{PLAYER_BLACK, PLAYER_WHITE, WasmReversi};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn new_game(config: &str) -> WasmReversi {
    match WasmReversi::new(config) {
        Ok(game) => game,
        Err(_) => panic!("config {config:?} rejected"),
    }
}

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn default_game_exposes_opening() {
    let game = new_game("seed = 1");

    assert_eq!(game.size(), 8);
    assert_eq!(game.current_player(), PLAYER_BLACK);
    assert_eq!(game.get_cell(3, 3).ok(), Some(PLAYER_WHITE));
    assert_eq!(game.get_cell(4, 3).ok(), Some(PLAYER_BLACK));
    assert!(game.get_cell(8, 8).is_err());

    let moves = js_sys::Array::from(&game.valid_moves().ok().unwrap());
    assert_eq!(moves.length(), 4);
}

#[wasm_bindgen_test]
fn committed_move_queues_board_changed() {
    let mut game = new_game("");

    let result = game.try_place_at(3, 2, false).ok().unwrap();
    assert_eq!(field(&result, "success").as_bool(), Some(true));
    assert_eq!(field(&result, "flipped").as_f64(), Some(1.0));

    let events = js_sys::Array::from(&game.drain_events().ok().unwrap());
    assert_eq!(events.length(), 1);
    assert_eq!(
        field(&events.get(0), "kind").as_string().as_deref(),
        Some("board_changed")
    );
    assert_eq!(js_sys::Array::from(&game.drain_events().ok().unwrap()).length(), 0);
}

#[wasm_bindgen_test]
fn ai_respects_turn_and_bad_player_codes() {
    let mut game = new_game("seed = 9");

    assert_eq!(game.play_ai_move(PLAYER_WHITE).ok(), Some(false));
    assert_eq!(game.play_ai_move(PLAYER_BLACK).ok(), Some(true));
    assert_eq!(game.current_player(), PLAYER_WHITE);
    assert!(game.play_ai_move(7).is_err());
}

#[wasm_bindgen_test]
fn resize_applies_on_start() {
    let mut game = new_game("");

    assert!(game.set_size(6).is_ok());
    assert!(game.start());
    assert_eq!(game.size(), 6);
    assert_eq!(game.cells().len(), 36);
    assert!(game.set_size(3).is_err());
}

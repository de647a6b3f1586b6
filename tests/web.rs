#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn wasm_ready_returns_true() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_starts_with_four_discs() {
    let game = WasmGame::new(JsValue::UNDEFINED).unwrap();
    let state = game.state().unwrap();

    assert_eq!(get(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(get(&state, "white_count").as_f64(), Some(2.0));
    assert_eq!(get(&state, "current_player").as_string().as_deref(), Some("black"));

    let board = Array::from(&get(&state, "board"));
    assert_eq!(board.length(), 8);
    let row = Array::from(&board.get(3));
    assert_eq!(row.get(3).as_string().as_deref(), Some("white"));
    assert_eq!(row.get(4).as_string().as_deref(), Some("black"));

    let moves = Array::from(&game.legal_moves().unwrap());
    assert_eq!(moves.length(), 4);
}

#[wasm_bindgen_test]
fn human_then_computer_move() {
    let config = Object::new();
    Reflect::set(&config, &"searchDepth".into(), &JsValue::from(2)).unwrap();
    let mut game = WasmGame::new(config.into()).unwrap();

    assert!(game.place(0, 0).is_err());
    game.place(2, 3).unwrap();
    let played = game.ai_move().unwrap();
    assert!(get(&played, "row").as_f64().is_some());

    let state = game.state().unwrap();
    assert_eq!(get(&state, "current_player").as_string().as_deref(), Some("black"));
    let status = game.advance_turn().unwrap();
    assert_eq!(status.as_string().as_deref(), Some("move"));
}

#[wasm_bindgen_test]
fn out_of_range_depth_is_rejected() {
    for depth in [0, 5] {
        let config = Object::new();
        Reflect::set(&config, &"searchDepth".into(), &JsValue::from(depth)).unwrap();
        assert!(WasmGame::new(config.into()).is_err());
    }
}

#[wasm_bindgen_test]
fn computer_color_comes_from_config() {
    let config = Object::new();
    Reflect::set(&config, &"computer".into(), &"black".into()).unwrap();
    let mut game = WasmGame::new(config.into()).unwrap();

    assert!(game.place(2, 3).is_err());
    game.ai_move().unwrap();
}

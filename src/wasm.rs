use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameInstance;
use crate::logging::init_logging;

/// JS handle to one game session.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` is a plain object with optional `searchDepth`, `computer`
    /// (`"black"` / `"white"`) and `logLevel` fields, or `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        init_logging(config.log_level_filter());

        Ok(Self {
            inner: GameInstance::new(config)?,
        })
    }

    pub fn place(&mut self, row: u8, col: u8) -> Result<(), JsError> {
        self.inner.place(row, col)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        let played = self.inner.do_ai_move()?;
        Ok(serde_wasm_bindgen::to_value(&played)?)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        self.inner.pass()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = advanceTurn)]
    pub fn advance_turn(&mut self) -> Result<JsValue, JsError> {
        let status = self.inner.advance_turn();
        Ok(serde_wasm_bindgen::to_value(&status)?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.get_legal_moves())?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }
}

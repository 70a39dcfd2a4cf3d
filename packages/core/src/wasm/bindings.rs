// WASM-биндинги контрактного движка для веб-фронтенда
// Сетевой вызов внешнего сервиса остаётся на стороне JS (fetch); ядро
// отдаёт валидацию, локальные преобразования, сборку capability-запроса
// и транспортный кодек.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use crate::api::dispatch;
use crate::crypto::{
    digraph_transform, rail_fence_transform, running_key_transform, shift_transform, Direction,
};
use crate::protocol::messages::OperationRequest;
use crate::protocol::validation;
use crate::protocol::wire;
use crate::registry;

type JsResult<T> = Result<T, JsValue>;

fn parse_request(request: JsValue) -> JsResult<OperationRequest> {
    serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))
}

/// Таблица дескрипторов для рендеринга форм (показать/скрыть поля)
#[wasm_bindgen]
pub fn descriptor_table() -> JsResult<JsValue> {
    console_error_panic_hook::set_once();
    serde_wasm_bindgen::to_value(registry::all_descriptors())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Провалидировать запрос, не выполняя его
#[wasm_bindgen]
pub fn validate_request(request: JsValue) -> JsResult<()> {
    let request = parse_request(request)?;
    validation::validate(&request)?;
    Ok(())
}

/// Собрать JSON-запрос внешнему сервису (включая локальную деривацию ключа)
#[wasm_bindgen]
pub fn prepare_capability_request(request: JsValue) -> JsResult<JsValue> {
    let request = parse_request(request)?;
    validation::validate(&request)?;
    let capability_request = dispatch::build_capability_request(&request)?;
    serde_wasm_bindgen::to_value(&capability_request)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Сдвиговый шифр, локально
#[wasm_bindgen]
pub fn shift_cipher(text: String, shift: i32, encrypt: bool) -> String {
    let direction = if encrypt { Direction::Encrypt } else { Direction::Decrypt };
    shift_transform(&text, shift, direction)
}

/// Шифр с бегущим ключом, локально
#[wasm_bindgen]
pub fn running_key_cipher(text: String, key: String, encrypt: bool) -> JsResult<String> {
    let direction = if encrypt { Direction::Encrypt } else { Direction::Decrypt };
    Ok(running_key_transform(&text, &key, direction)?)
}

/// Биграммный шифр (Плейфер), локально
#[wasm_bindgen]
pub fn digraph_cipher(text: String, key: String, encrypt: bool) -> JsResult<String> {
    let direction = if encrypt { Direction::Encrypt } else { Direction::Decrypt };
    Ok(digraph_transform(&text, &key, direction)?)
}

/// Перестановочный шифр (изгородь), локально
#[wasm_bindgen]
pub fn rail_fence_cipher(text: String, rails: i32, encrypt: bool) -> JsResult<String> {
    let direction = if encrypt { Direction::Encrypt } else { Direction::Decrypt };
    Ok(rail_fence_transform(&text, rails, direction)?)
}

/// Байты → транспортный текст
#[wasm_bindgen]
pub fn encode_transport(bytes: Vec<u8>) -> String {
    wire::encode_for_transport(&bytes)
}

/// Транспортный текст → байты
#[wasm_bindgen]
pub fn decode_transport(text: String) -> JsResult<Vec<u8>> {
    Ok(wire::decode_from_transport(&text)?)
}

/// Формат контейнера по сигнатурным байтам ("png" | "bmp" | "wav")
#[wasm_bindgen]
pub fn classify_container(bytes: Vec<u8>) -> JsResult<String> {
    Ok(wire::classify_container(&bytes)?.to_string())
}

// WASM-слой для веб-фронтенда

pub mod bindings;
pub mod console;

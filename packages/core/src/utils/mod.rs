// Утилиты

pub mod logging;

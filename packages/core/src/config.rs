//! Централизованная конфигурация ядра CipherStegno
//!
//! Все константы и настройки должны быть определены здесь,
//! чтобы избежать хардкода по всему проекту.

use std::sync::OnceLock;

/// Глобальная конфигурация (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Политика допуска через шлюз аутентификации (биометрия на мобильных).
///
/// Исторически мобильные приложения пускали пользователя, если
/// биометрия недоступна на устройстве. Это security-relevant дефолт, поэтому
/// он вынесен в конфигурацию явно, а не зашит в диспетчер.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// Допускать, если шлюз аутентификации недоступен
    Permissive,
    /// Блокировать, если шлюз аутентификации недоступен
    Strict,
}

/// Основная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    // ============================================
    // КРИПТОГРАФИЧЕСКИЕ ПАРАМЕТРЫ
    // ============================================

    /// Длина симметричного ключа (AES-256 / ChaCha20, в байтах)
    pub key_length: usize,

    /// Длина IV для блочных шифров CBC-класса (в байтах)
    pub block_iv_length: usize,

    /// Длина nonce для ChaCha20 (в байтах)
    pub stream_nonce_length: usize,

    // ============================================
    // ПАРАМЕТРЫ АЛГОРИТМОВ
    // ============================================

    /// Сдвиг Цезаря по умолчанию (если фронтенд не прислал свой)
    pub default_shift: i32,

    /// Число рельсов перестановочного шифра по умолчанию
    pub default_rails: i32,

    // ============================================
    // ГРАНИЦА ВНЕШНЕГО СЕРВИСА
    // ============================================

    /// Плейсхолдер, которым подменяется приватный ключ перед выдачей наружу
    pub redaction_placeholder: &'static str,

    /// Политика допуска при недоступном шлюзе аутентификации
    pub admission_policy: AdmissionPolicy,
}

impl Config {
    /// Создать конфигурацию с дефолтными значениями
    pub fn default() -> Self {
        Self {
            // Криптография
            key_length: 32,
            block_iv_length: 16,
            stream_nonce_length: 8,

            // Алгоритмы
            default_shift: 3,
            default_rails: 3,

            // Граница внешнего сервиса
            redaction_placeholder: "[REDACTED]",
            admission_policy: AdmissionPolicy::Permissive,
        }
    }

    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CIPHERSTEGNO_DEFAULT_SHIFT") {
            if let Ok(parsed) = val.parse() {
                config.default_shift = parsed;
            }
        }

        if let Ok(val) = std::env::var("CIPHERSTEGNO_ADMISSION") {
            config.admission_policy = match val.as_str() {
                "strict" => AdmissionPolicy::Strict,
                _ => AdmissionPolicy::Permissive,
            };
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Автоматически инициализирует конфигурацию со значениями по умолчанию
    /// при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Инициализировать глобальную конфигурацию со значениями по умолчанию
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(Self::default())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию из переменных окружения
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_from_env() -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(Self::from_env())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию с кастомным экземпляром
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG.set(config)
            .map_err(|_| "Config already initialized")
    }

    /// Проверить, инициализирована ли глобальная конфигурация
    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.key_length, 32);
        assert_eq!(config.default_shift, 3);
        assert_eq!(config.admission_policy, AdmissionPolicy::Permissive);
    }

    #[test]
    fn test_config_values() {
        let config = Config::default();

        // Crypto params
        assert_eq!(config.block_iv_length, 16);
        assert_eq!(config.stream_nonce_length, 8);

        // Algorithm defaults
        assert_eq!(config.default_rails, 3);

        // Redaction
        assert_eq!(config.redaction_placeholder, "[REDACTED]");
    }
}

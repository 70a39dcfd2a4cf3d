// Деривация симметричного ключа из passphrase
// SHA-256 от UTF-8 байтов passphrase, результат используется как ключ напрямую

use crate::config::Config;
use crate::error::{Result, StegnoError};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

// Compile-time константа для размера массива (должна совпадать с Config::default())
const KEY_LENGTH: usize = 32;

/// Деривировать 256-битный симметричный ключ из passphrase.
///
/// Детерминированно: одинаковый passphrase всегда даёт одинаковый ключ,
/// соли нет. Это осознанный компромисс, унаследованный от развёрнутой
/// границы внешнего сервиса: все три фронтенда шифруют и расшифровывают
/// одним и тем же выводом, поэтому добавление соли сломало бы wire-контракт.
///
/// Известная слабость: одинаковые passphrase у разных пользователей дают
/// одинаковые ключи, что делает возможными атаки предвычисления
/// (rainbow-таблицы). Не чинить молча, менять только вместе с контрактом границы.
///
/// # Errors
///
/// `InvalidInput`, если passphrase пустой.
pub fn derive_symmetric_key(passphrase: &str) -> Result<Zeroizing<[u8; KEY_LENGTH]>> {
    if passphrase.is_empty() {
        return Err(StegnoError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    debug_assert_eq!(KEY_LENGTH, Config::global().key_length);

    let digest = Sha256::digest(passphrase.as_bytes());

    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    key.copy_from_slice(&digest);
    Ok(key)
}

//! Криптографический модуль
//!
//! Локально ядро выполняет только две вещи:
//!
//! - классические шифры ([`classical`]): сдвиговый, с бегущим ключом,
//!   биграммный и перестановочный, чистые синхронные функции без состояния;
//! - деривацию симметричного ключа ([`keys`]): passphrase → 256-битный ключ.
//!
//! AES/ChaCha20/3DES/RSA и LSB-стеганография выполняются внешним сервисом
//! через границу [`crate::protocol::transport`], ядро лишь валидирует их
//! параметры и формы результата.

/// Классические шифры (Цезарь, Виженер, Плейфер, изгородь)
pub mod classical;

/// Деривация симметричного ключа из passphrase
pub mod keys;

pub use classical::{
    digraph_transform, rail_fence_transform, running_key_transform, shift_transform, Direction,
};
pub use keys::derive_symmetric_key;

// Реестр алгоритмов
// Единственный источник правды о том, какие поля нужны/запрещены для каждой
// комбинации (семейство, алгоритм, режим). Раньше эта таблица поддерживалась
// вручную в трёх фронтендах независимо, и расходилась.

use crate::error::{Result, StegnoError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Семейство операции: шифрование или стеганография
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Cipher,
    Stego,
}

/// Режим операции
///
/// Encrypt/Decrypt для семейства Cipher, Encode/Decode для Stego.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
    Encode,
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        };
        write!(f, "{}", s)
    }
}

/// Идентификаторы алгоритмов
///
/// Строковые имена совпадают с wire-именами REST API (`caesar`, `aes`, ...),
/// чтобы фронтенды не вели собственных таблиц соответствия.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Сдвиговый подстановочный шифр (Цезарь)
    Caesar,
    /// Подстановочный шифр с бегущим ключом (Виженер)
    Vigenere,
    /// Биграммный подстановочный шифр (Плейфер, матрица 5x5)
    Playfair,
    /// Перестановочный шифр "железнодорожная изгородь"
    Railfence,
    /// Блочный симметричный (AES-256-CBC)
    Aes,
    /// Блочный симметричный (Blowfish-CBC)
    Blowfish,
    /// Поточный симметричный (ChaCha20)
    Chacha20,
    /// Тройной блочный симметричный (3DES)
    Des3,
    /// Асимметричный (RSA-OAEP)
    Rsa,
    /// LSB-стеганография (PNG/BMP/WAV контейнеры)
    Lsb,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Playfair => "playfair",
            Algorithm::Railfence => "railfence",
            Algorithm::Aes => "aes",
            Algorithm::Blowfish => "blowfish",
            Algorithm::Chacha20 => "chacha20",
            Algorithm::Des3 => "des3",
            Algorithm::Rsa => "rsa",
            Algorithm::Lsb => "lsb",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = StegnoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "caesar" => Ok(Algorithm::Caesar),
            "vigenere" => Ok(Algorithm::Vigenere),
            "playfair" => Ok(Algorithm::Playfair),
            "railfence" => Ok(Algorithm::Railfence),
            "aes" => Ok(Algorithm::Aes),
            "blowfish" => Ok(Algorithm::Blowfish),
            "chacha20" => Ok(Algorithm::Chacha20),
            "des3" | "3des" => Ok(Algorithm::Des3),
            "rsa" => Ok(Algorithm::Rsa),
            "lsb" => Ok(Algorithm::Lsb),
            other => Err(StegnoError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Вид параметра запроса (без значения, используется в наборах дескриптора)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Shift,
    Passphrase,
    RawKey,
    InitializationVector,
    PrivateKeyMaterial,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Shift => "shift",
            ParameterKind::Passphrase => "passphrase",
            ParameterKind::RawKey => "raw_key",
            ParameterKind::InitializationVector => "initialization_vector",
            ParameterKind::PrivateKeyMaterial => "private_key_material",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Дескриптор возможностей одной комбинации (семейство, алгоритм, режим)
///
/// Фронтенды рендерят формы (показать/скрыть поля) напрямую из этих данных,
/// не дублируя правила.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmDescriptor {
    pub family: Family,
    pub algorithm: Algorithm,
    pub mode: Mode,
    /// Поля, без которых запрос не будет принят
    pub required_fields: &'static [ParameterKind],
    /// Поля, присутствие которых отклоняет запрос
    pub forbidden_fields: &'static [ParameterKind],
    /// Нужен хоть какой-то ключевой материал (passphrase / raw key / private key)
    pub key_required: bool,
}

impl AlgorithmDescriptor {
    pub fn requires(&self, kind: ParameterKind) -> bool {
        self.required_fields.contains(&kind)
    }

    pub fn forbids(&self, kind: ParameterKind) -> bool {
        self.forbidden_fields.contains(&kind)
    }
}

use Algorithm::*;
use Family::*;
use Mode::*;
use ParameterKind::*;

// Статическая таблица дескрипторов. Encrypt/decrypt одного алгоритма
// сознательно различаются: CBC-decrypt требует IV, который encrypt только
// производит; RSA-decrypt требует приватный ключ, которого encrypt не видит.
static TABLE: &[AlgorithmDescriptor] = &[
    AlgorithmDescriptor {
        family: Cipher, algorithm: Caesar, mode: Encrypt,
        required_fields: &[Shift],
        forbidden_fields: &[Passphrase, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Caesar, mode: Decrypt,
        required_fields: &[Shift],
        forbidden_fields: &[Passphrase, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Vigenere, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Vigenere, mode: Decrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Playfair, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Playfair, mode: Decrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        // Shift опционален: число рельсов, по умолчанию из Config
        family: Cipher, algorithm: Railfence, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Passphrase, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Railfence, mode: Decrypt,
        required_fields: &[],
        forbidden_fields: &[Passphrase, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Aes, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Aes, mode: Decrypt,
        required_fields: &[InitializationVector],
        forbidden_fields: &[Shift, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Blowfish, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Blowfish, mode: Decrypt,
        required_fields: &[InitializationVector],
        forbidden_fields: &[Shift, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Chacha20, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Chacha20, mode: Decrypt,
        // nonce ChaCha20 едет в слоте initialization_vector
        required_fields: &[InitializationVector],
        forbidden_fields: &[Shift, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Des3, mode: Encrypt,
        required_fields: &[],
        forbidden_fields: &[Shift, InitializationVector, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Des3, mode: Decrypt,
        required_fields: &[InitializationVector],
        forbidden_fields: &[Shift, PrivateKeyMaterial],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Rsa, mode: Encrypt,
        // Ключевая пара генерируется внешним сервисом, локально ничего не нужно
        required_fields: &[],
        forbidden_fields: &[Shift, Passphrase, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Cipher, algorithm: Rsa, mode: Decrypt,
        required_fields: &[PrivateKeyMaterial],
        forbidden_fields: &[Shift, Passphrase, RawKey, InitializationVector],
        key_required: true,
    },
    AlgorithmDescriptor {
        family: Stego, algorithm: Lsb, mode: Encode,
        // Passphrase опциональна: скрываемое сообщение может шифроваться
        required_fields: &[],
        forbidden_fields: &[Shift, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
    AlgorithmDescriptor {
        family: Stego, algorithm: Lsb, mode: Decode,
        required_fields: &[],
        forbidden_fields: &[Shift, RawKey, InitializationVector, PrivateKeyMaterial],
        key_required: false,
    },
];

static REGISTRY: OnceLock<HashMap<(Family, Algorithm, Mode), &'static AlgorithmDescriptor>> =
    OnceLock::new();

fn registry() -> &'static HashMap<(Family, Algorithm, Mode), &'static AlgorithmDescriptor> {
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::with_capacity(TABLE.len());
        for desc in TABLE {
            let prev = map.insert((desc.family, desc.algorithm, desc.mode), desc);
            // Инвариант реестра: ключ (семейство, алгоритм, режим) уникален
            debug_assert!(
                prev.is_none(),
                "duplicate registry key: {:?}",
                (desc.family, desc.algorithm, desc.mode)
            );
        }
        map
    })
}

/// Найти дескриптор для (семейство, алгоритм, режим)
///
/// # Errors
///
/// `UnknownAlgorithm`, если такой комбинации в реестре нет.
pub fn descriptor_for(
    family: Family,
    algorithm: Algorithm,
    mode: Mode,
) -> Result<&'static AlgorithmDescriptor> {
    registry()
        .get(&(family, algorithm, mode))
        .copied()
        .ok_or_else(|| {
            StegnoError::UnknownAlgorithm(format!(
                "no descriptor for {:?}/{}/{}",
                family, algorithm, mode
            ))
        })
}

/// Все дескрипторы (для рендеринга форм фронтендами)
pub fn all_descriptors() -> &'static [AlgorithmDescriptor] {
    TABLE
}

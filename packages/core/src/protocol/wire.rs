// Транспортное кодирование бинарных payload'ов
// Граница внешнего сервиса текстовая (JSON), поэтому бинарные данные едут
// как Base64. Классификация контейнеров идёт по сигнатурным байтам, а не по
// метаданным вызывающей стороны (расширение/MIME не являются доверенным вводом).

use crate::error::{Result, StegnoError};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Формат cover/stego контейнера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    Png,
    Bmp,
    Wav,
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContainerFormat::Png => "png",
            ContainerFormat::Bmp => "bmp",
            ContainerFormat::Wav => "wav",
        };
        write!(f, "{}", s)
    }
}

// Сигнатурные байты поддерживаемых контейнеров
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const BMP_MAGIC: [u8; 2] = [0x42, 0x4D]; // "BM"
const RIFF_MAGIC: [u8; 4] = [0x52, 0x49, 0x46, 0x46]; // "RIFF"
const WAVE_TAG: [u8; 4] = [0x57, 0x41, 0x56, 0x45]; // "WAVE" по смещению 8

/// Закодировать байты в транспортно-безопасный текст (Base64)
pub fn encode_for_transport(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Декодировать транспортный текст обратно в байты
///
/// # Errors
///
/// `MalformedEncoding` на невалидном вводе, без молчаливого усечения.
pub fn decode_from_transport(text: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(text)
        .map_err(|e| StegnoError::MalformedEncoding(format!("Base64 decode failed: {}", e)))
}

/// Определить формат контейнера по сигнатурным байтам.
///
/// # Errors
///
/// `UnsupportedContainer`, если first-bytes не совпадают ни с PNG, ни с BMP,
/// ни с WAV.
pub fn classify_container(bytes: &[u8]) -> Result<ContainerFormat> {
    if bytes.len() >= PNG_MAGIC.len() && bytes[..PNG_MAGIC.len()] == PNG_MAGIC {
        return Ok(ContainerFormat::Png);
    }
    if bytes.len() >= BMP_MAGIC.len() && bytes[..BMP_MAGIC.len()] == BMP_MAGIC {
        return Ok(ContainerFormat::Bmp);
    }
    if bytes.len() >= 12 && bytes[..4] == RIFF_MAGIC && bytes[8..12] == WAVE_TAG {
        return Ok(ContainerFormat::Wav);
    }
    Err(StegnoError::UnsupportedContainer(
        "Unrecognized container format (expected PNG, BMP or WAV signature)".to_string(),
    ))
}

/// Cover-контейнер: байты + заявленный формат.
///
/// Создаётся из байтов вызывающей стороны, валидируется на согласованность
/// сигнатуры и заявленного тега, потребляется внешним сервисом. Никогда не
/// мутируется на месте (copy-on-transform).
#[derive(Debug, Clone)]
pub struct CoverContainer {
    bytes: Vec<u8>,
    format: ContainerFormat,
}

impl CoverContainer {
    /// Создать контейнер, сверив заявленный формат с сигнатурными байтами
    ///
    /// # Errors
    ///
    /// `UnsupportedContainer`, если сигнатура не распознана или не совпадает
    /// с заявленным тегом.
    pub fn new(bytes: Vec<u8>, declared: ContainerFormat) -> Result<Self> {
        let actual = classify_container(&bytes)?;
        if actual != declared {
            return Err(StegnoError::UnsupportedContainer(format!(
                "Declared format {} does not match content signature {}",
                declared, actual
            )));
        }
        Ok(Self {
            bytes,
            format: declared,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ContainerFormat {
        self.format
    }

    /// Транспортное представление для границы внешнего сервиса
    pub fn to_transport(&self) -> String {
        encode_for_transport(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Минимальные валидные заголовки для тестов
    pub(crate) fn png_bytes() -> Vec<u8> {
        let mut v = PNG_MAGIC.to_vec();
        v.extend_from_slice(b"fake png body");
        v
    }

    pub(crate) fn wav_bytes() -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(b"RIFF");
        v.extend_from_slice(&36u32.to_le_bytes());
        v.extend_from_slice(b"WAVE");
        v.extend_from_slice(b"fmt ");
        v
    }

    #[test]
    fn test_transport_roundtrip() {
        let cases: &[&[u8]] = &[b"", b"a", b"hello world", &[0u8, 255, 128, 7]];
        for &b in cases {
            let encoded = encode_for_transport(b);
            let decoded = decode_from_transport(&encoded).unwrap();
            assert_eq!(decoded, b);
        }
    }

    #[test]
    fn test_malformed_transport_rejected() {
        let err = decode_from_transport("not-valid-encoding!!").unwrap_err();
        assert!(matches!(err, StegnoError::MalformedEncoding(_)));
    }

    #[test]
    fn test_classify_png() {
        assert_eq!(classify_container(&png_bytes()).unwrap(), ContainerFormat::Png);
    }

    #[test]
    fn test_classify_bmp() {
        let bytes = b"BM\x00\x00\x00\x00 bitmap".to_vec();
        assert_eq!(classify_container(&bytes).unwrap(), ContainerFormat::Bmp);
    }

    #[test]
    fn test_classify_wav() {
        assert_eq!(classify_container(&wav_bytes()).unwrap(), ContainerFormat::Wav);
    }

    #[test]
    fn test_classify_rejects_noise() {
        let err = classify_container(&[0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap_err();
        assert!(matches!(err, StegnoError::UnsupportedContainer(_)));
        // RIFF без WAVE-тега тоже не контейнер
        let riff_only = b"RIFF\x00\x00\x00\x00AVI LIST".to_vec();
        assert!(classify_container(&riff_only).is_err());
    }

    #[test]
    fn test_cover_container_tag_mismatch() {
        let err = CoverContainer::new(png_bytes(), ContainerFormat::Bmp).unwrap_err();
        assert!(matches!(err, StegnoError::UnsupportedContainer(_)));
    }

    #[test]
    fn test_cover_container_ok() {
        let cover = CoverContainer::new(png_bytes(), ContainerFormat::Png).unwrap();
        assert_eq!(cover.format(), ContainerFormat::Png);
        let transported = cover.to_transport();
        assert_eq!(decode_from_transport(&transported).unwrap(), cover.bytes());
    }
}

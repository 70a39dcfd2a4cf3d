// Валидация входящих запросов
// Выполняется до любого внешнего вызова (fail fast, без лишнего round-trip).
// Чисто функциональна: запрос никогда не мутируется.

use crate::error::{Result, StegnoError};
use crate::protocol::messages::OperationRequest;
use crate::protocol::wire::CoverContainer;
use crate::registry::{self, AlgorithmDescriptor, Family, Mode};

/// Провалидировать запрос по реестру алгоритмов.
///
/// Порядок проверок:
/// 1. дескриптор по (семейство, алгоритм, режим): `UnknownAlgorithm`;
/// 2. присутствие запрещённых полей: `ForbiddenParameter`;
/// 3. наличие ключевого материала при `key_required`: `MissingKey`;
/// 4. обязательные поля дескриптора (например IV на decrypt):
///    `MissingParameter`;
/// 5. для stego согласованность контейнера по сигнатурным байтам
///    (заявленный тег не является доверенным): `UnsupportedContainer`;
/// 6. непустота payload'ов: `EmptyPayload`.
///
/// Возвращает дескриптор, чтобы диспетчеру не искать его повторно.
pub fn validate(request: &OperationRequest) -> Result<&'static AlgorithmDescriptor> {
    let descriptor = registry::descriptor_for(request.family, request.algorithm, request.mode)?;

    // Запрещённые поля
    for kind in request.params.keys() {
        if descriptor.forbids(*kind) {
            return Err(StegnoError::ForbiddenParameter(format!(
                "Field '{}' is not accepted by {}/{}",
                kind, request.algorithm, request.mode
            )));
        }
    }

    // Ключевой материал
    if descriptor.key_required && !request.has_key_material() {
        return Err(StegnoError::MissingKey(format!(
            "{}/{} requires a passphrase, raw key or private key",
            request.algorithm, request.mode
        )));
    }

    // Обязательные поля
    for kind in descriptor.required_fields {
        if !request.params.contains_key(kind) {
            return Err(StegnoError::MissingParameter(format!(
                "Field '{}' is required for {}/{}",
                kind, request.algorithm, request.mode
            )));
        }
    }

    // Контейнер stego-операций
    if request.family == Family::Stego {
        validate_container(request)?;
    }

    // Непустые payload'ы
    if request.payload.is_empty() {
        return Err(StegnoError::EmptyPayload(
            "Primary payload cannot be empty".to_string(),
        ));
    }
    if request.mode == Mode::Encode {
        match &request.hidden_message {
            Some(msg) if !msg.is_empty() => {}
            _ => {
                return Err(StegnoError::EmptyPayload(
                    "Hidden message cannot be empty".to_string(),
                ))
            }
        }
    }

    Ok(descriptor)
}

/// Собрать и проверить контейнер stego-запроса.
///
/// Классификация идёт по сигнатурным байтам через кодек, а не по
/// метаданным вызывающей стороны.
pub fn validate_container(request: &OperationRequest) -> Result<CoverContainer> {
    let declared = request.container_format.ok_or_else(|| {
        StegnoError::UnsupportedContainer(
            "Stego request must declare a container format (png, bmp or wav)".to_string(),
        )
    })?;

    let bytes = request.payload.as_binary().ok_or_else(|| {
        StegnoError::UnsupportedContainer(
            "Stego request payload must be a binary container".to_string(),
        )
    })?;

    CoverContainer::new(bytes.to_vec(), declared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::{OperationRequest, ParameterValue};
    use crate::protocol::wire::ContainerFormat;
    use crate::registry::{Algorithm, Mode};

    fn png_bytes() -> Vec<u8> {
        let mut v = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        v.extend_from_slice(b"body");
        v
    }

    #[test]
    fn test_caesar_ok() {
        let req = OperationRequest::cipher(Algorithm::Caesar, Mode::Encrypt, "Attack at 5")
            .with_param(ParameterValue::Shift(3));
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_caesar_rejects_key_field() {
        // Ключевое поле запрещено дескриптором сдвигового шифра
        let req = OperationRequest::cipher(Algorithm::Caesar, Mode::Encrypt, "text")
            .with_param(ParameterValue::Shift(3))
            .with_param(ParameterValue::Passphrase("secret".into()));
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::ForbiddenParameter(_)));
    }

    #[test]
    fn test_caesar_requires_shift() {
        let req = OperationRequest::cipher(Algorithm::Caesar, Mode::Encrypt, "text");
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::MissingParameter(_)));
    }

    #[test]
    fn test_aes_decrypt_without_iv_rejected() {
        // Отклоняется валидатором до любого внешнего вызова
        let req = OperationRequest::cipher(Algorithm::Aes, Mode::Decrypt, "Y2lwaGVydGV4dA==")
            .with_param(ParameterValue::Passphrase("secret".into()));
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::MissingParameter(_)));
    }

    #[test]
    fn test_aes_without_key_rejected() {
        let req = OperationRequest::cipher(Algorithm::Aes, Mode::Encrypt, "text");
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::MissingKey(_)));
    }

    #[test]
    fn test_unknown_combination_rejected() {
        let mut req = OperationRequest::cipher(Algorithm::Lsb, Mode::Encrypt, "text");
        req.family = crate::registry::Family::Cipher;
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_empty_payload_rejected() {
        let req = OperationRequest::cipher(Algorithm::Caesar, Mode::Encrypt, "")
            .with_param(ParameterValue::Shift(3));
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::EmptyPayload(_)));
    }

    #[test]
    fn test_stego_encode_ok() {
        let req = OperationRequest::stego_encode(png_bytes(), ContainerFormat::Png, "secret");
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_stego_encode_empty_message_rejected() {
        let req = OperationRequest::stego_encode(png_bytes(), ContainerFormat::Png, "");
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::EmptyPayload(_)));
    }

    #[test]
    fn test_stego_declared_tag_mismatch_rejected() {
        // Заявлен BMP, а содержимое PNG: метаданным не верим
        let req = OperationRequest::stego_encode(png_bytes(), ContainerFormat::Bmp, "secret");
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::UnsupportedContainer(_)));
    }

    #[test]
    fn test_stego_garbage_container_rejected() {
        let req = OperationRequest::stego_encode(vec![1, 2, 3, 4, 5], ContainerFormat::Png, "msg");
        let err = validate(&req).unwrap_err();
        assert!(matches!(err, StegnoError::UnsupportedContainer(_)));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let req = OperationRequest::cipher(Algorithm::Vigenere, Mode::Encrypt, "text")
            .with_param(ParameterValue::RawKey(b"KEY".to_vec()));
        let before = serde_json::to_string(&req).unwrap();
        let _ = validate(&req);
        assert_eq!(serde_json::to_string(&req).unwrap(), before);
    }
}

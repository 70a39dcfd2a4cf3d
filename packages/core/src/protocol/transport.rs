// Граница внешнего сервиса
// AES/RSA/LSB-стеганография выполняются внешним сервисом; ядро готовит
// запрос, однократно ждёт ответ и никогда не делает retry (retry остаётся заботой
// транспортного collaborator'а)

use crate::error::StegnoError;
use crate::protocol::messages::{CapabilityRequest, CapabilityResponse};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Ошибки границы внешнего сервиса
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Сервис ответил ошибкой; деталь передаётся вызывающему без изменений
    #[error("Capability failure: {0}")]
    Failure(String),

    #[error("Capability timed out")]
    Timeout,

    #[error("Capability call cancelled")]
    Cancelled,
}

impl From<CapabilityError> for StegnoError {
    fn from(err: CapabilityError) -> Self {
        match err {
            CapabilityError::Failure(detail) => StegnoError::ExternalCapabilityFailure(detail),
            CapabilityError::Timeout => StegnoError::Timeout,
            CapabilityError::Cancelled => StegnoError::Cancelled,
        }
    }
}

/// Future вызова внешнего сервиса.
///
/// Без `Send`: в WASM контекст однопоточный (браузерный event loop), на
/// десктопе вызов оборачивается в [`execute_with_timeout`].
pub type CapabilityFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<CapabilityResponse, CapabilityError>> + 'a>>;

/// Внешний исполнитель операций (удалённый сервис AES/RSA/stego).
///
/// Единственная точка приостановки на запрос; реализация принадлежит
/// платформенному транспорту (fetch в браузере, HTTP-клиент на десктопе).
pub trait ExternalCapability {
    fn execute(&self, request: CapabilityRequest) -> CapabilityFuture<'_>;
}

/// Шлюз аутентификации (биометрия на мобильных платформах).
///
/// Ядро его только потребляет: бинарный результат решает, допускается ли
/// вызывающий к диспетчеру вообще. Поведение при недоступном шлюзе задаёт
/// [`crate::config::AdmissionPolicy`].
pub trait AuthGate {
    /// Доступна ли аутентификация на этой платформе/устройстве
    fn can_authenticate(&self) -> bool;

    /// Выполнить аутентификацию; `true` при успехе
    fn authenticate(&self) -> bool;
}

/// Обернуть вызов внешнего сервиса в таймаут (desktop)
#[cfg(feature = "desktop")]
pub async fn execute_with_timeout<C: ExternalCapability>(
    capability: &C,
    request: CapabilityRequest,
    timeout: std::time::Duration,
) -> std::result::Result<CapabilityResponse, CapabilityError> {
    match tokio::time::timeout(timeout, capability.execute(request)).await {
        Ok(result) => result,
        Err(_) => Err(CapabilityError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_error_mapping() {
        let err: StegnoError = CapabilityError::Timeout.into();
        assert!(matches!(err, StegnoError::Timeout));

        let err: StegnoError = CapabilityError::Cancelled.into();
        assert!(matches!(err, StegnoError::Cancelled));

        let err: StegnoError = CapabilityError::Failure("boom".into()).into();
        match err {
            // Деталь сервиса проходит без изменений
            StegnoError::ExternalCapabilityFailure(detail) => assert_eq!(detail, "boom"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

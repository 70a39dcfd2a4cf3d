// Публичный API ядра
// Высокоуровневый фасад для фронтендов: допуск через шлюз аутентификации
// и диспетчеризация операций

pub mod dispatch;

pub use dispatch::{dispatch, DispatchState};

use crate::config::{AdmissionPolicy, Config};
use crate::error::{Result, StegnoError};
use crate::protocol::messages::{OperationRequest, OperationResult};
use crate::protocol::transport::{AuthGate, ExternalCapability};

/// Главный API ядра CipherStegno.
///
/// Один экземпляр на фронтенд; запросы независимы и могут выполняться
/// конкурентно, разделяемого изменяемого состояния нет.
pub struct CipherStegnoApi<C, G> {
    capability: C,
    auth_gate: G,
}

impl<C, G> CipherStegnoApi<C, G>
where
    C: ExternalCapability,
    G: AuthGate,
{
    pub fn new(capability: C, auth_gate: G) -> Self {
        Self {
            capability,
            auth_gate,
        }
    }

    /// Решить, допускается ли вызывающий к диспетчеру.
    ///
    /// Если шлюз аутентификации недоступен, поведение определяет
    /// [`AdmissionPolicy`]: `Permissive` (историческое поведение мобильных
    /// приложений) допускает, `Strict` отказывает.
    pub fn admit(&self) -> Result<()> {
        if !self.auth_gate.can_authenticate() {
            return match Config::global().admission_policy {
                AdmissionPolicy::Permissive => {
                    tracing::warn!("auth gate unavailable, admitting per permissive policy");
                    Ok(())
                }
                AdmissionPolicy::Strict => Err(StegnoError::NotAuthenticated(
                    "Authentication unavailable and admission policy is strict".to_string(),
                )),
            };
        }

        if self.auth_gate.authenticate() {
            Ok(())
        } else {
            Err(StegnoError::NotAuthenticated(
                "Authentication failed".to_string(),
            ))
        }
    }

    /// Выполнить операцию: допуск → валидация → исполнение
    pub async fn execute(&self, request: OperationRequest) -> Result<OperationResult> {
        self.admit()?;
        dispatch(request, &self.capability).await
    }
}

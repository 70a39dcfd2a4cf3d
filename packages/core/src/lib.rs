// Secure CipherStegno Core
// Rust/WASM движок диспетчеризации крипто- и стего-операций с единым
// контрактом параметров для всех трёх фронтендов

#![warn(clippy::all)]

// Модули
pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod utils;

// Re-exports для удобства
pub use api::CipherStegnoApi;
pub use config::{AdmissionPolicy, Config};
pub use error::{Result, StegnoError};
pub use protocol::messages::{OperationRequest, OperationResult, ParameterValue, Payload};
pub use protocol::transport::{AuthGate, CapabilityError, ExternalCapability};
pub use protocol::wire::ContainerFormat;
pub use registry::{Algorithm, AlgorithmDescriptor, Family, Mode, ParameterKind};

// WASM-specific bindings
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod request;
pub mod settings;

pub use crate::domain::DomainError;
pub use request::GenerationRequest;
pub use settings::{SettingKey, Settings, SettingsOverrides};

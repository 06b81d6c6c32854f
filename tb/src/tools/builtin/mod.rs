//! Built-in tools

mod calculate;
mod generate_api_key;
mod generate_password;
mod generate_pin;
mod generate_token;
mod generate_uuid;
mod hash_text;
mod render;

pub use calculate::CalculateTool;
pub use generate_api_key::GenerateApiKeyTool;
pub use generate_password::GeneratePasswordTool;
pub use generate_pin::GeneratePinTool;
pub use generate_token::GenerateTokenTool;
pub use generate_uuid::GenerateUuidTool;
pub use hash_text::HashTextTool;

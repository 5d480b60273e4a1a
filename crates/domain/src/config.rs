pub mod decoder;
pub mod errors;
pub mod logging;
pub mod root;

pub use decoder::DecoderConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;

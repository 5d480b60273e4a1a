pub mod decoder;
pub mod name;

pub use decoder::HickoryMessageDecoder;
pub use name::render_name;

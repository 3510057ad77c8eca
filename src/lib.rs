pub mod driver;
pub mod ecc;
pub mod error;

pub use ecc::{Codeword, ErrorLocation};
pub use error::{Error, Result};

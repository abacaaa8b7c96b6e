pub mod dispatcher;
pub mod error;
pub mod form;
pub mod label;
pub mod presentation;
pub mod questions;
pub mod record;

pub use dispatcher::*;
pub use error::*;
pub use form::*;
pub use label::*;
pub use presentation::*;
pub use questions::*;
pub use record::*;

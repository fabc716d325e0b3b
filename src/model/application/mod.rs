//! Models about application commands and the interactions that invoke them.

mod command;
pub use command::*;
mod interaction;
pub use interaction::*;
mod message;
pub use message::*;
mod option;
pub use option::*;
mod response_type;
pub use response_type::*;

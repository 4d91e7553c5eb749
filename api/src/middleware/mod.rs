pub mod caller;
pub mod cors;
pub mod request_id;
pub mod security;

pub use caller::*;
pub use cors::*;
pub use request_id::*;
pub use security::*;

pub use opcrab_client as client;
pub use opcrab_types as types;

pub mod stack {
    pub use opcrab_stack::*;
}

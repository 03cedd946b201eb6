mod rpc;
mod sampling;
mod shell;

pub use rpc::*;
pub use sampling::*;
pub use shell::*;

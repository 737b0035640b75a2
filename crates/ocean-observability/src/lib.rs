mod blockchain;
mod publish;
mod service;

pub use blockchain::*;
pub use publish::*;
pub use service::*;

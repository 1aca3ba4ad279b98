pub mod handler;
pub mod record_type_map;
pub mod server;
pub mod wire_response;

pub use handler::DnsRequestHandler;
pub use record_type_map::RecordTypeMapper;
pub use server::{DnsServer, ServerState};

//! HTTP transport layer.
//!
//! Services talk to the network only through [`HttpTransport`], so tests can
//! substitute a recording mock for [`ReqwestTransport`].

mod http_transport;

pub use http_transport::{HttpTransport, ReqwestTransport, TransportResponse};

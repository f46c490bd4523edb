// clubwifi-api: Async clients for the two remote collaborators --
// the MikroTik RouterOS REST API and the LHU club membership API.

pub mod error;
pub mod membership;
pub mod router;
pub mod transport;

pub use error::Error;
pub use membership::MembershipClient;
pub use router::RouterClient;
pub use transport::{TlsMode, TransportConfig};

use std::sync::Arc;

use clubwifi_api::{MembershipClient, RouterClient};

/// Shared handler state: the two collaborator clients, constructed once
/// at startup and handed to every handler. No process-wide globals --
/// tests inject clients pointed at mock servers the same way.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RouterClient>,
    pub membership: Arc<MembershipClient>,
}

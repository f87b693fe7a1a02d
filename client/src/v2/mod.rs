//! Resource clients of the v2 API generation.

mod plans;
mod roles;

pub use plans::PlansClient;
pub use roles::RolesClient;

use crate::http::HttpClient;

/// Handle to the v2 resource surface.
#[derive(Debug, Clone)]
pub struct V2Client {
    pub plans: PlansClient,
    pub roles: RolesClient,
}

impl V2Client {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self {
            plans: PlansClient::new(http.clone()),
            roles: RolesClient::new(http),
        }
    }
}

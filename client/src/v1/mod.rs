//! Resource clients of the v1 API generation.
//!
//! v1 predates typed request bodies; create and update accept a JSON
//! attribute bag assembled by the caller and the server echoes the stored
//! resource back.

mod flavors;
mod nodes;
mod overcloud_roles;
mod overclouds;
mod racks;
mod resource_classes;

pub use flavors::FlavorsClient;
pub use nodes::NodesClient;
pub use overcloud_roles::OvercloudRolesClient;
pub use overclouds::OvercloudsClient;
pub use racks::RacksClient;
pub use resource_classes::ResourceClassesClient;

use crate::http::HttpClient;

/// Handle to the v1 resource surface.
#[derive(Debug, Clone)]
pub struct V1Client {
    pub racks: RacksClient,
    pub resource_classes: ResourceClassesClient,
    pub flavors: FlavorsClient,
    pub overclouds: OvercloudsClient,
    pub overcloud_roles: OvercloudRolesClient,
    pub nodes: NodesClient,
}

impl V1Client {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self {
            racks: RacksClient::new(http.clone()),
            resource_classes: ResourceClassesClient::new(http.clone()),
            flavors: FlavorsClient::new(http.clone()),
            overclouds: OvercloudsClient::new(http.clone()),
            overcloud_roles: OvercloudRolesClient::new(http.clone()),
            nodes: NodesClient::new(http),
        }
    }
}

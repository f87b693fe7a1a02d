use crate::{
    operations::{Get, List, PluginResult},
    resources::{
        error, utils,
        utils::{optional_cell, print_properties, print_table, CreateRow, GetHeaderRow, OutputFormat},
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use snafu::ResultExt;
use tuskar_client::models;

/// Nodes resource.
#[derive(clap::Args, Debug)]
pub struct Nodes {}

/// Node resource.
#[derive(clap::Args, Debug)]
pub struct Node {}

impl CreateRow for models::Node {
    fn row(&self) -> Row {
        row![self.id, optional_cell(self.rack.as_ref().map(|r| r.id))]
    }
}

impl GetHeaderRow for models::Node {
    fn get_header_row(&self) -> Row {
        (*utils::NODE_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for Nodes {
    async fn list(output: &OutputFormat) -> PluginResult {
        let nodes = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .nodes
            .list()
            .await
            .context(error::ListResourceSnafu { resource: "node" })?;
        print_table(output, nodes);
        Ok(())
    }
}

#[async_trait(?Send)]
impl Get for Node {
    type ID = String;
    async fn get(id: &Self::ID, output: &OutputFormat) -> PluginResult {
        let node = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .nodes
            .get(id)
            .await
            .context(error::GetResourceSnafu {
                resource: "node",
                id: id.clone(),
            })?;
        print_properties(output, node);
        Ok(())
    }
}

use crate::{
    operations::{List, PluginResult},
    resources::{
        error,
        utils,
        utils::{optional_cell, print_table, CreateRow, GetHeaderRow, OutputFormat},
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use snafu::ResultExt;
use tuskar_client::models;

/// Roles resource.
#[derive(clap::Args, Debug)]
pub struct Roles {}

impl CreateRow for models::Role {
    fn row(&self) -> Row {
        row![
            self.uuid,
            self.name,
            self.version,
            optional_cell(self.description.as_deref())
        ]
    }
}

impl GetHeaderRow for models::Role {
    fn get_header_row(&self) -> Row {
        (*utils::ROLE_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for Roles {
    async fn list(output: &OutputFormat) -> PluginResult {
        let roles = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .roles
            .list()
            .await
            .context(error::ListRolesSnafu)?;
        print_table(output, roles);
        Ok(())
    }
}

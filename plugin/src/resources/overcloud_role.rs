use crate::{
    operations::{Get, List, PluginResult},
    resources::{
        error::{self, Error},
        utils,
        utils::{
            optional_cell, print_properties, print_table, CreateRow, GetHeaderRow, OutputFormat,
        },
        CreateOvercloudRoleArgs, UpdateOvercloudRoleArgs,
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use serde_json::Value;
use snafu::ResultExt;
use tuskar_client::models;

/// Overcloud roles resource.
#[derive(clap::Args, Debug)]
pub struct OvercloudRoles {}

/// Overcloud role resource.
#[derive(clap::Args, Debug)]
pub struct OvercloudRole {}

impl CreateRow for models::OvercloudRole {
    fn row(&self) -> Row {
        row![
            self.id,
            optional_cell(self.name.as_deref()),
            optional_cell(self.image_name.as_deref()),
            optional_cell(self.flavor_id.as_deref()),
            optional_cell(self.description.as_deref())
        ]
    }
}

impl GetHeaderRow for models::OvercloudRole {
    fn get_header_row(&self) -> Row {
        (*utils::OVERCLOUD_ROLE_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for OvercloudRoles {
    async fn list(output: &OutputFormat) -> PluginResult {
        let roles = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overcloud_roles
            .list()
            .await
            .context(error::ListResourceSnafu {
                resource: "overcloud role",
            })?;
        print_table(output, roles);
        Ok(())
    }
}

/// Resolve an overcloud role from a name or numeric ID.
pub async fn find_overcloud_role(name_or_id: &str) -> Result<models::OvercloudRole, Error> {
    let roles = &RestClient::v1()
        .context(error::WrongVersionSnafu)?
        .overcloud_roles;

    if !name_or_id.is_empty() && name_or_id.chars().all(|c| c.is_ascii_digit()) {
        match roles.get(name_or_id).await {
            Ok(role) => return Ok(role),
            Err(tuskar_client::Error::NotFound { .. }) => {}
            Err(source) => {
                return Err(Error::GetResource {
                    resource: "overcloud role",
                    id: name_or_id.to_string(),
                    source,
                })
            }
        }
    }

    let listing = roles.list().await.context(error::ListResourceSnafu {
        resource: "overcloud role",
    })?;
    let mut matches: Vec<_> = listing
        .into_iter()
        .filter(|role| role.name.as_deref() == Some(name_or_id))
        .collect();
    match matches.len() {
        0 => error::ResourceNotFoundSnafu {
            resource: "overcloud role",
            name: name_or_id,
        }
        .fail(),
        1 => Ok(matches.remove(0)),
        _ => error::MultipleMatchesSnafu {
            resource: "overcloud role",
            name: name_or_id,
        }
        .fail(),
    }
}

fn body(
    name: Option<&str>,
    description: Option<&str>,
    image_name: Option<&str>,
    flavor_id: Option<&str>,
) -> Value {
    let mut map = serde_json::Map::new();
    if let Some(name) = name {
        map.insert("name".to_string(), Value::String(name.to_string()));
    }
    if let Some(description) = description {
        map.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
    }
    if let Some(image_name) = image_name {
        map.insert(
            "image_name".to_string(),
            Value::String(image_name.to_string()),
        );
    }
    if let Some(flavor_id) = flavor_id {
        map.insert("flavor_id".to_string(), Value::String(flavor_id.to_string()));
    }
    Value::Object(map)
}

#[async_trait(?Send)]
impl Get for OvercloudRole {
    type ID = String;
    async fn get(id: &Self::ID, output: &OutputFormat) -> PluginResult {
        let role = find_overcloud_role(id).await?;
        print_properties(output, role);
        Ok(())
    }
}

impl OvercloudRole {
    /// Create a new overcloud role.
    pub async fn create(args: &CreateOvercloudRoleArgs, output: &OutputFormat) -> PluginResult {
        let role = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overcloud_roles
            .create(&body(
                Some(&args.name),
                args.description.as_deref(),
                args.image_name.as_deref(),
                args.flavor_id.as_deref(),
            ))
            .await
            .context(error::CreateResourceSnafu {
                resource: "overcloud role",
            })?;
        print_properties(output, role);
        Ok(())
    }

    /// Update an existing overcloud role.
    pub async fn update(args: &UpdateOvercloudRoleArgs, output: &OutputFormat) -> PluginResult {
        let role = find_overcloud_role(&args.id).await?;
        let updated = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overcloud_roles
            .update(
                &role.id.to_string(),
                &body(
                    args.name.as_deref(),
                    args.description.as_deref(),
                    args.image_name.as_deref(),
                    args.flavor_id.as_deref(),
                ),
            )
            .await
            .context(error::UpdateResourceSnafu {
                resource: "overcloud role",
                id: role.id.to_string(),
            })?;
        print_properties(output, updated);
        Ok(())
    }

    /// Delete an overcloud role.
    pub async fn delete(id: &str) -> PluginResult {
        let role = find_overcloud_role(id).await?;
        RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overcloud_roles
            .delete(&role.id.to_string())
            .await
            .context(error::DeleteResourceSnafu {
                resource: "overcloud role",
                id: role.id.to_string(),
            })?;
        println!(
            "Deleted Overcloud Role \"{}\".",
            role.name.unwrap_or_default()
        );
        Ok(())
    }
}

use crate::{
    operations::{Get, List, PluginResult},
    resources::{
        error::{self, Error},
        utils,
        utils::{
            format_attributes, format_roles, optional_cell, print_properties, print_table,
            CreateRow, GetHeaderRow, OutputFormat,
        },
        CreateOvercloudArgs, UpdateOvercloudArgs,
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use serde_json::Value;
use snafu::ResultExt;
use tuskar_client::models;

/// Overclouds resource.
#[derive(clap::Args, Debug)]
pub struct Overclouds {}

/// Overcloud resource.
#[derive(clap::Args, Debug)]
pub struct Overcloud {}

impl CreateRow for models::Overcloud {
    fn row(&self) -> Row {
        row![
            self.id,
            optional_cell(self.name.as_deref()),
            optional_cell(self.description.as_deref()),
            optional_cell(self.stack_id.as_deref())
        ]
    }
}

impl GetHeaderRow for models::Overcloud {
    fn get_header_row(&self) -> Row {
        (*utils::OVERCLOUD_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for Overclouds {
    async fn list(output: &OutputFormat) -> PluginResult {
        let overclouds = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overclouds
            .list()
            .await
            .context(error::ListResourceSnafu {
                resource: "overcloud",
            })?;
        print_table(output, overclouds);
        Ok(())
    }
}

/// Resolve an overcloud from its name.
pub async fn find_overcloud(name: &str) -> Result<models::Overcloud, Error> {
    let overclouds = &RestClient::v1().context(error::WrongVersionSnafu)?.overclouds;
    match overclouds.get(name).await {
        Ok(overcloud) => Ok(overcloud),
        Err(tuskar_client::Error::NotFound { .. }) => error::ResourceNotFoundSnafu {
            resource: "overcloud",
            name,
        }
        .fail(),
        Err(source) => Err(Error::GetResource {
            resource: "overcloud",
            id: name.to_string(),
            source,
        }),
    }
}

fn create_body(args: &CreateOvercloudArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    map.insert("name".to_string(), Value::String(args.name.clone()));
    if let Some(description) = &args.description {
        map.insert("description".to_string(), Value::String(description.clone()));
    }
    if let Some(stack_id) = &args.stack_id {
        map.insert("stack_id".to_string(), Value::String(stack_id.clone()));
    }
    map.insert(
        "attributes".to_string(),
        Value::Object(format_attributes(&args.attributes)?),
    );
    map.insert(
        "counts".to_string(),
        serde_json::json!(format_roles(&args.roles)?),
    );
    Ok(Value::Object(map))
}

fn update_body(args: &UpdateOvercloudArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    if let Some(name) = &args.name {
        map.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(description) = &args.description {
        map.insert("description".to_string(), Value::String(description.clone()));
    }
    if let Some(stack_id) = &args.stack_id {
        map.insert("stack_id".to_string(), Value::String(stack_id.clone()));
    }
    if !args.attributes.is_empty() {
        map.insert(
            "attributes".to_string(),
            Value::Object(format_attributes(&args.attributes)?),
        );
    }
    if !args.roles.is_empty() {
        map.insert(
            "counts".to_string(),
            serde_json::json!(format_roles(&args.roles)?),
        );
    }
    Ok(Value::Object(map))
}

#[async_trait(?Send)]
impl Get for Overcloud {
    type ID = String;
    async fn get(id: &Self::ID, output: &OutputFormat) -> PluginResult {
        let overcloud = find_overcloud(id).await?;
        print_properties(output, overcloud);
        Ok(())
    }
}

impl Overcloud {
    /// Create a new overcloud.
    pub async fn create(args: &CreateOvercloudArgs, output: &OutputFormat) -> PluginResult {
        let overcloud = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overclouds
            .create(&create_body(args)?)
            .await
            .context(error::CreateResourceSnafu {
                resource: "overcloud",
            })?;
        print_properties(output, overcloud);
        Ok(())
    }

    /// Update an existing overcloud.
    pub async fn update(args: &UpdateOvercloudArgs, output: &OutputFormat) -> PluginResult {
        let overcloud = find_overcloud(&args.id).await?;
        let updated = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overclouds
            .update(
                &overcloud.name.clone().unwrap_or_else(|| args.id.clone()),
                &update_body(args)?,
            )
            .await
            .context(error::UpdateResourceSnafu {
                resource: "overcloud",
                id: args.id.clone(),
            })?;
        print_properties(output, updated);
        Ok(())
    }

    /// Delete an overcloud.
    pub async fn delete(id: &str) -> PluginResult {
        let overcloud = find_overcloud(id).await?;
        RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .overclouds
            .delete(&overcloud.name.clone().unwrap_or_else(|| id.to_string()))
            .await
            .context(error::DeleteResourceSnafu {
                resource: "overcloud",
                id,
            })?;
        println!(
            "Deleted Overcloud \"{}\".",
            overcloud.name.unwrap_or_default()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_carries_attributes_and_counts() {
        let args = CreateOvercloudArgs {
            name: "overcloud-1".to_string(),
            description: Some("prod".to_string()),
            stack_id: None,
            attributes: vec!["AdminPassword=secret".to_string()],
            roles: vec!["1=3".to_string()],
        };
        let body = create_body(&args).unwrap();
        assert_eq!(body["name"], "overcloud-1");
        assert_eq!(body["attributes"]["AdminPassword"], "secret");
        assert_eq!(
            body["counts"][0],
            serde_json::json!({ "overcloud_role_id": 1, "num_nodes": 3 })
        );
        assert!(body.get("stack_id").is_none());
    }
}

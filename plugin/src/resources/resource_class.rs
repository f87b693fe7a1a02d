use crate::{
    operations::{Get, List, PluginResult},
    resources::{
        error::{self, Error},
        utils,
        utils::{
            optional_cell, print_properties, print_table, CreateRow, GetHeaderRow, OutputFormat,
        },
        CreateResourceClassArgs, UpdateResourceClassArgs,
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use serde_json::Value;
use snafu::ResultExt;
use tuskar_client::models;

/// Resource classes resource.
#[derive(clap::Args, Debug)]
pub struct ResourceClasses {}

/// Resource class resource.
#[derive(clap::Args, Debug)]
pub struct ResourceClass {}

impl CreateRow for models::ResourceClass {
    fn row(&self) -> Row {
        row![
            self.id,
            optional_cell(self.name.as_deref()),
            optional_cell(self.service_type.as_deref()),
            self.racks.len()
        ]
    }
}

impl GetHeaderRow for models::ResourceClass {
    fn get_header_row(&self) -> Row {
        (*utils::RESOURCE_CLASS_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for ResourceClasses {
    async fn list(output: &OutputFormat) -> PluginResult {
        let classes = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .resource_classes
            .list()
            .await
            .context(error::ListResourceSnafu {
                resource: "resource class",
            })?;
        print_table(output, classes);
        Ok(())
    }
}

/// Resolve a resource class from a name or numeric ID.
pub async fn find_resource_class(name_or_id: &str) -> Result<models::ResourceClass, Error> {
    let classes = &RestClient::v1()
        .context(error::WrongVersionSnafu)?
        .resource_classes;

    if !name_or_id.is_empty() && name_or_id.chars().all(|c| c.is_ascii_digit()) {
        match classes.get(name_or_id).await {
            Ok(class) => return Ok(class),
            Err(tuskar_client::Error::NotFound { .. }) => {}
            Err(source) => {
                return Err(Error::GetResource {
                    resource: "resource class",
                    id: name_or_id.to_string(),
                    source,
                })
            }
        }
    }

    let listing = classes.list().await.context(error::ListResourceSnafu {
        resource: "resource class",
    })?;
    let mut matches: Vec<_> = listing
        .into_iter()
        .filter(|class| class.name.as_deref() == Some(name_or_id))
        .collect();
    match matches.len() {
        0 => error::ResourceNotFoundSnafu {
            resource: "resource class",
            name: name_or_id,
        }
        .fail(),
        1 => Ok(matches.remove(0)),
        _ => error::MultipleMatchesSnafu {
            resource: "resource class",
            name: name_or_id,
        }
        .fail(),
    }
}

#[async_trait(?Send)]
impl Get for ResourceClass {
    type ID = String;
    async fn get(id: &Self::ID, output: &OutputFormat) -> PluginResult {
        let class = find_resource_class(id).await?;
        print_properties(output, class);
        Ok(())
    }
}

impl ResourceClass {
    /// Create a new resource class.
    pub async fn create(args: &CreateResourceClassArgs, output: &OutputFormat) -> PluginResult {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), Value::String(args.name.clone()));
        if let Some(service_type) = &args.service_type {
            map.insert(
                "service_type".to_string(),
                Value::String(service_type.clone()),
            );
        }
        let class = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .resource_classes
            .create(&Value::Object(map))
            .await
            .context(error::CreateResourceSnafu {
                resource: "resource class",
            })?;
        print_properties(output, class);
        Ok(())
    }

    /// Update an existing resource class.
    pub async fn update(args: &UpdateResourceClassArgs, output: &OutputFormat) -> PluginResult {
        let class = find_resource_class(&args.id).await?;
        let mut map = serde_json::Map::new();
        if let Some(name) = &args.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(service_type) = &args.service_type {
            map.insert(
                "service_type".to_string(),
                Value::String(service_type.clone()),
            );
        }
        let updated = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .resource_classes
            .update(&class.id.to_string(), &Value::Object(map))
            .await
            .context(error::UpdateResourceSnafu {
                resource: "resource class",
                id: class.id.to_string(),
            })?;
        print_properties(output, updated);
        Ok(())
    }

    /// Delete a resource class.
    pub async fn delete(id: &str) -> PluginResult {
        let class = find_resource_class(id).await?;
        RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .resource_classes
            .delete(&class.id.to_string())
            .await
            .context(error::DeleteResourceSnafu {
                resource: "resource class",
                id: class.id.to_string(),
            })?;
        println!(
            "Deleted resource class \"{}\".",
            class.name.unwrap_or_default()
        );
        Ok(())
    }
}

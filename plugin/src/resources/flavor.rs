use crate::{
    operations::PluginResult,
    resources::{
        error::{self, Error},
        utils,
        utils::{
            optional_cell, parse_capacities, print_properties, print_table, CreateRow,
            GetHeaderRow, OutputFormat,
        },
        CreateFlavorArgs, UpdateFlavorArgs,
    },
    rest_wrapper::RestClient,
};
use prettytable::Row;
use serde_json::Value;
use snafu::ResultExt;
use tuskar_client::models;

/// Flavors resource, nested under a resource class.
#[derive(clap::Args, Debug)]
pub struct Flavors {}

/// Flavor resource.
#[derive(clap::Args, Debug)]
pub struct Flavor {}

impl CreateRow for models::Flavor {
    fn row(&self) -> Row {
        let capacities = self
            .capacities
            .iter()
            .map(|c| format!("{}: {} {}", c.name, c.value, c.unit))
            .collect::<Vec<_>>()
            .join(", ");
        row![
            self.id,
            optional_cell(self.name.as_deref()),
            optional_cell(self.max_vms),
            capacities
        ]
    }
}

impl GetHeaderRow for models::Flavor {
    fn get_header_row(&self) -> Row {
        (*utils::FLAVOR_HEADERS).clone()
    }
}

fn create_body(args: &CreateFlavorArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    map.insert("name".to_string(), Value::String(args.name.clone()));
    if let Some(max_vms) = args.max_vms {
        map.insert("max_vms".to_string(), Value::from(max_vms));
    }
    if let Some(capacities) = &args.capacities {
        map.insert(
            "capacities".to_string(),
            serde_json::json!(parse_capacities(capacities)?),
        );
    }
    Ok(Value::Object(map))
}

fn update_body(args: &UpdateFlavorArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    if let Some(name) = &args.name {
        map.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(max_vms) = args.max_vms {
        map.insert("max_vms".to_string(), Value::from(max_vms));
    }
    if let Some(capacities) = &args.capacities {
        map.insert(
            "capacities".to_string(),
            serde_json::json!(parse_capacities(capacities)?),
        );
    }
    Ok(Value::Object(map))
}

impl Flavors {
    /// List the flavors of a resource class.
    pub async fn list(resource_class: &str, output: &OutputFormat) -> PluginResult {
        let flavors = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .flavors
            .list(resource_class)
            .await
            .context(error::ListResourceSnafu { resource: "flavor" })?;
        print_table(output, flavors);
        Ok(())
    }
}

impl Flavor {
    /// Show a flavor of a resource class.
    pub async fn get(resource_class: &str, id: &str, output: &OutputFormat) -> PluginResult {
        let flavor = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .flavors
            .get(resource_class, id)
            .await
            .context(error::GetResourceSnafu {
                resource: "flavor",
                id,
            })?;
        print_properties(output, flavor);
        Ok(())
    }

    /// Create a new flavor within a resource class.
    pub async fn create(args: &CreateFlavorArgs, output: &OutputFormat) -> PluginResult {
        let flavor = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .flavors
            .create(&args.resource_class, &create_body(args)?)
            .await
            .context(error::CreateResourceSnafu { resource: "flavor" })?;
        print_properties(output, flavor);
        Ok(())
    }

    /// Update a flavor of a resource class.
    pub async fn update(args: &UpdateFlavorArgs, output: &OutputFormat) -> PluginResult {
        let updated = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .flavors
            .update(&args.resource_class, &args.id, &update_body(args)?)
            .await
            .context(error::UpdateResourceSnafu {
                resource: "flavor",
                id: args.id.clone(),
            })?;
        print_properties(output, updated);
        Ok(())
    }

    /// Delete a flavor of a resource class.
    pub async fn delete(resource_class: &str, id: &str) -> PluginResult {
        RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .flavors
            .delete(resource_class, id)
            .await
            .context(error::DeleteResourceSnafu {
                resource: "flavor",
                id,
            })?;
        println!("Deleted flavor \"{id}\".");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_row_joins_capacities() {
        let flavor: models::Flavor = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "micro",
            "max_vms": 10,
            "capacities": [
                { "name": "cpu", "value": "1", "unit": "CPU" },
                { "name": "memory", "value": "1024", "unit": "MB" }
            ]
        }))
        .unwrap();
        let row = flavor.row();
        assert_eq!(
            row.get_cell(3).unwrap().get_content(),
            "cpu: 1 CPU, memory: 1024 MB"
        );
    }
}

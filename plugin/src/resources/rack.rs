use crate::{
    operations::{Get, List, PluginResult},
    resources::{
        error::{self, Error},
        utils,
        utils::{
            marshal_association, optional_cell, parse_capacities, print_properties, print_table,
            CreateRow, GetHeaderRow, OutputFormat,
        },
        CreateRackArgs, UpdateRackArgs,
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use serde_json::Value;
use snafu::ResultExt;
use tuskar_client::models;

/// Racks resource.
#[derive(clap::Args, Debug)]
pub struct Racks {}

/// Rack resource.
#[derive(clap::Args, Debug)]
pub struct Rack {}

impl CreateRow for models::Rack {
    fn row(&self) -> Row {
        row![
            self.id,
            optional_cell(self.name.as_deref()),
            optional_cell(self.subnet.as_deref()),
            optional_cell(self.slots),
            optional_cell(self.state.as_deref()),
            self.nodes.len()
        ]
    }
}

impl GetHeaderRow for models::Rack {
    fn get_header_row(&self) -> Row {
        (*utils::RACK_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for Racks {
    async fn list(output: &OutputFormat) -> PluginResult {
        let racks = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .racks
            .list()
            .await
            .context(error::ListResourceSnafu { resource: "rack" })?;
        print_table(output, racks);
        Ok(())
    }
}

/// Resolve a rack from a name or numeric ID.
pub async fn find_rack(name_or_id: &str) -> Result<models::Rack, Error> {
    let racks = &RestClient::v1().context(error::WrongVersionSnafu)?.racks;

    if !name_or_id.is_empty() && name_or_id.chars().all(|c| c.is_ascii_digit()) {
        match racks.get(name_or_id).await {
            Ok(rack) => return Ok(rack),
            Err(tuskar_client::Error::NotFound { .. }) => {}
            Err(source) => {
                return Err(Error::GetResource {
                    resource: "rack",
                    id: name_or_id.to_string(),
                    source,
                })
            }
        }
    }

    let listing = racks
        .list()
        .await
        .context(error::ListResourceSnafu { resource: "rack" })?;
    let mut matches: Vec<_> = listing
        .into_iter()
        .filter(|rack| rack.name.as_deref() == Some(name_or_id))
        .collect();
    match matches.len() {
        0 => error::ResourceNotFoundSnafu {
            resource: "rack",
            name: name_or_id,
        }
        .fail(),
        1 => Ok(matches.remove(0)),
        _ => error::MultipleMatchesSnafu {
            resource: "rack",
            name: name_or_id,
        }
        .fail(),
    }
}

fn create_body(args: &CreateRackArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    map.insert("name".to_string(), Value::String(args.name.clone()));
    map.insert("subnet".to_string(), Value::String(args.subnet.clone()));
    map.insert("slots".to_string(), Value::from(args.slots));
    marshal_association(&mut map, "resource_class", args.resource_class.as_deref())?;
    if let Some(capacities) = &args.capacities {
        map.insert(
            "capacities".to_string(),
            serde_json::json!(parse_capacities(capacities)?),
        );
    }
    Ok(Value::Object(map))
}

fn update_body(args: &UpdateRackArgs) -> Result<Value, Error> {
    let mut map = serde_json::Map::new();
    if let Some(name) = &args.name {
        map.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(subnet) = &args.subnet {
        map.insert("subnet".to_string(), Value::String(subnet.clone()));
    }
    if let Some(slots) = args.slots {
        map.insert("slots".to_string(), Value::from(slots));
    }
    marshal_association(&mut map, "resource_class", args.resource_class.as_deref())?;
    if let Some(capacities) = &args.capacities {
        map.insert(
            "capacities".to_string(),
            serde_json::json!(parse_capacities(capacities)?),
        );
    }
    Ok(Value::Object(map))
}

#[async_trait(?Send)]
impl Get for Rack {
    type ID = String;
    async fn get(id: &Self::ID, output: &OutputFormat) -> PluginResult {
        let rack = find_rack(id).await?;
        print_properties(output, rack);
        Ok(())
    }
}

impl Rack {
    /// Create a new rack.
    pub async fn create(args: &CreateRackArgs, output: &OutputFormat) -> PluginResult {
        let rack = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .racks
            .create(&create_body(args)?)
            .await
            .context(error::CreateResourceSnafu { resource: "rack" })?;
        print_properties(output, rack);
        Ok(())
    }

    /// Update an existing rack.
    pub async fn update(args: &UpdateRackArgs, output: &OutputFormat) -> PluginResult {
        let rack = find_rack(&args.id).await?;
        let updated = RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .racks
            .update(&rack.id.to_string(), &update_body(args)?)
            .await
            .context(error::UpdateResourceSnafu {
                resource: "rack",
                id: rack.id.to_string(),
            })?;
        print_properties(output, updated);
        Ok(())
    }

    /// Delete a rack.
    pub async fn delete(id: &str) -> PluginResult {
        let rack = find_rack(id).await?;
        RestClient::v1()
            .context(error::WrongVersionSnafu)?
            .racks
            .delete(&rack.id.to_string())
            .await
            .context(error::DeleteResourceSnafu {
                resource: "rack",
                id: rack.id.to_string(),
            })?;
        println!("Deleted rack \"{}\".", rack.name.unwrap_or_default());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::CreateRackArgs;

    #[test]
    fn create_body_carries_association_and_capacities() {
        let args = CreateRackArgs {
            name: "compute-rack".to_string(),
            subnet: "192.168.1.0/24".to_string(),
            slots: 30,
            capacities: Some("total_cpu:64:CPU".to_string()),
            resource_class: Some("42".to_string()),
        };
        let body = create_body(&args).unwrap();
        assert_eq!(body["name"], "compute-rack");
        assert_eq!(body["slots"], 30);
        assert_eq!(body["resource_class"], serde_json::json!({ "id": 42 }));
        assert_eq!(body["capacities"][0]["unit"], "CPU");
    }

    #[test]
    fn update_body_skips_absent_flags() {
        let args = UpdateRackArgs {
            id: "1".to_string(),
            name: None,
            subnet: None,
            slots: Some(40),
            capacities: None,
            resource_class: Some(String::new()),
        };
        let body = update_body(&args).unwrap();
        assert!(body.get("name").is_none());
        assert_eq!(body["slots"], 40);
        assert_eq!(body["resource_class"], serde_json::Value::Null);
    }
}

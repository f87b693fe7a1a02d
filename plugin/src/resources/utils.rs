use crate::resources::error::Error;
use prettytable::{format, Row, Table};
use serde::ser;
use serde_json::Value;
use tuskar_client::models::{Capacity, OvercloudRoleCount};

const CELL_NO_CONTENT: &str = "<none>";

/// Optional cells should display `CELL_NO_CONTENT` if None.
pub fn optional_cell<T: ToString>(field: Option<T>) -> String {
    field
        .map(|f| f.to_string())
        .unwrap_or_else(|| CELL_NO_CONTENT.to_string())
}

// Constants to store the table headers of the Tabular output formats.
lazy_static! {
    pub static ref PLAN_HEADERS: Row = row!["UUID", "NAME", "DESCRIPTION", "ROLES"];
    pub static ref ROLE_HEADERS: Row = row!["UUID", "NAME", "VERSION", "DESCRIPTION"];
    pub static ref RACK_HEADERS: Row = row!["ID", "NAME", "SUBNET", "SLOTS", "STATE", "# OF NODES"];
    pub static ref FLAVOR_HEADERS: Row = row!["ID", "NAME", "MAX VMS", "CAPACITIES"];
    pub static ref OVERCLOUD_HEADERS: Row = row!["ID", "NAME", "DESCRIPTION", "STACK ID"];
    pub static ref OVERCLOUD_ROLE_HEADERS: Row =
        row!["ID", "NAME", "IMAGE NAME", "FLAVOR ID", "DESCRIPTION"];
    pub static ref RESOURCE_CLASS_HEADERS: Row = row!["ID", "NAME", "SERVICE TYPE", "# OF RACKS"];
    pub static ref NODE_HEADERS: Row = row!["ID", "RACK"];
    pub static ref PROPERTY_HEADERS: Row = row!["PROPERTY", "VALUE"];
}

// table_printer takes the above defined headers and the rows created at
// execution, to create a Tabular output and prints to the stdout.
pub fn table_printer(titles: Row, rows: Vec<Row>) {
    let mut table = Table::new();
    // FORMAT_CLEAN has been set to remove table borders
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(titles);
    for row in rows {
        table.add_row(row);
    }
    table.printstd();
}

/// CreateRow trait to be implemented by a resource to create its row.
pub trait CreateRow {
    fn row(&self) -> Row;
}

/// CreateRows trait to be implemented by resource lists to create the table
/// rows.
pub trait CreateRows {
    fn create_rows(&self) -> Vec<Row>;
}

impl<T> CreateRows for Vec<T>
where
    T: CreateRow,
{
    fn create_rows(&self) -> Vec<Row> {
        self.iter().map(|i| i.row()).collect()
    }
}

/// GetHeaderRow trait to be implemented by resources to fetch the
/// corresponding headers.
pub trait GetHeaderRow {
    fn get_header_row(&self) -> Row;
}

impl<T> GetHeaderRow for Vec<T>
where
    T: GetHeaderRow,
{
    fn get_header_row(&self) -> Row {
        self.first()
            .map(GetHeaderRow::get_header_row)
            .unwrap_or_default()
    }
}

// OutputFormat to be used as an enum to match the output from args.
#[derive(Debug, Clone, strum_macros::EnumString, strum_macros::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    None,
    Yaml,
    Json,
}

pub fn print_table<T>(output: &OutputFormat, obj: T)
where
    T: ser::Serialize,
    T: CreateRows,
    T: GetHeaderRow,
{
    match output {
        OutputFormat::Yaml => {
            // Show the YAML form output if output format is YAML.
            let s = serde_yaml::to_string(&obj).unwrap();
            println!("{s}");
        }
        OutputFormat::Json => {
            // Show the JSON form output if output format is JSON.
            let s = serde_json::to_string(&obj).unwrap();
            println!("{s}");
        }
        OutputFormat::None => {
            // Show the tabular form if output format is not specified.
            let rows: Vec<Row> = obj.create_rows();
            let header: Row = obj.get_header_row();
            table_printer(header, rows);
        }
    }
}

/// Show views print one property per row instead of one resource per row.
pub fn print_properties<T>(output: &OutputFormat, obj: T)
where
    T: ser::Serialize,
{
    match output {
        OutputFormat::Yaml => {
            let s = serde_yaml::to_string(&obj).unwrap();
            println!("{s}");
        }
        OutputFormat::Json => {
            let s = serde_json::to_string(&obj).unwrap();
            println!("{s}");
        }
        OutputFormat::None => {
            let value = serde_json::to_value(&obj).unwrap();
            let mut rows = vec![];
            if let Value::Object(map) = value {
                let mut entries: Vec<_> = map.into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                for (name, value) in entries {
                    rows.push(row![name, property_value(&value)]);
                }
            }
            table_printer((*PROPERTY_HEADERS).clone(), rows);
        }
    }
}

/// Render one property value for the show view. Attribute maps become
/// `key=value` lines and object lists become blocks of such lines.
fn property_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            entries
                .into_iter()
                .map(|(k, v)| format!("{k}={}", property_value(v)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Value::Array(items) => items
            .iter()
            .map(property_value)
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => other.to_string(),
    }
}

/// Split `key=value` argument strings into pairs.
pub fn format_key_value(params: &[String]) -> Result<Vec<(String, String)>, Error> {
    params
        .iter()
        .map(|param| match param.split_once('=') {
            Some((name, value)) => Ok((name.to_string(), value.to_string())),
            None => Err(Error::MalformedParameter {
                param: param.clone(),
            }),
        })
        .collect()
}

/// Reformat CLI attributes into the map expected by the API, rejecting
/// duplicate keys.
pub fn format_attributes(params: &[String]) -> Result<serde_json::Map<String, Value>, Error> {
    let mut attributes = serde_json::Map::new();
    for (key, value) in format_key_value(params)? {
        if attributes.contains_key(&key) {
            return Err(Error::DuplicateKey { key });
        }
        attributes.insert(key, Value::String(value));
    }
    Ok(attributes)
}

/// Reformat CLI `role_id=count` arguments into the count list expected by
/// the API.
pub fn format_roles(params: &[String]) -> Result<Vec<OvercloudRoleCount>, Error> {
    let mut counts: Vec<OvercloudRoleCount> = vec![];
    for (key, value) in format_key_value(params)? {
        let malformed = || Error::MalformedRoleCount {
            param: format!("{key}={value}"),
        };
        let role_id: i64 = key.parse().map_err(|_| malformed())?;
        let num_nodes: i64 = value.parse().map_err(|_| malformed())?;
        if counts.iter().any(|c| c.overcloud_role_id == role_id) {
            return Err(Error::DuplicateKey { key });
        }
        counts.push(OvercloudRoleCount {
            overcloud_role_id: role_id,
            num_nodes,
        });
    }
    Ok(counts)
}

/// Parse a `name:value:unit` comma separated capacity list.
pub fn parse_capacities(capacities: &str) -> Result<Vec<Capacity>, Error> {
    if capacities.is_empty() {
        return Ok(vec![]);
    }
    capacities
        .split(',')
        .map(|capacity| {
            let fields: Vec<&str> = capacity.split(':').collect();
            match fields.as_slice() {
                [name, value, unit] => Ok(Capacity {
                    name: name.to_string(),
                    value: value.to_string(),
                    unit: unit.to_string(),
                }),
                _ => Err(Error::MalformedCapacity {
                    capacity: capacity.to_string(),
                }),
            }
        })
        .collect()
}

/// Marshal an association flag into an API request map.
///
/// An absent flag leaves the map untouched, an empty string clears the
/// association, any other value becomes an `{"id": ...}` reference.
pub fn marshal_association(
    map: &mut serde_json::Map<String, Value>,
    name: &str,
    value: Option<&str>,
) -> Result<(), Error> {
    match value {
        None => {}
        Some("") => {
            map.insert(name.to_string(), Value::Null);
        }
        Some(value) => {
            let id: i64 = value.parse().map_err(|_| Error::MalformedAssociation {
                value: value.to_string(),
            })?;
            map.insert(name.to_string(), serde_json::json!({ "id": id }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_pairs_split_on_the_first_equals() {
        let pairs = format_key_value(&["a=1".to_string(), "b=x=y".to_string()]).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x=y".to_string())
            ]
        );
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        let error = format_key_value(&["not-a-pair".to_string()]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed parameter(not-a-pair). Use the key=value format."
        );
    }

    #[test]
    fn duplicate_attributes_are_rejected() {
        let error =
            format_attributes(&["key=one".to_string(), "key=two".to_string()]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "The attribute name key can't be given twice."
        );
    }

    #[test]
    fn role_counts_parse_into_the_api_shape() {
        let counts = format_roles(&["1=3".to_string(), "2=0".to_string()]).unwrap();
        assert_eq!(
            counts,
            vec![
                OvercloudRoleCount {
                    overcloud_role_id: 1,
                    num_nodes: 3
                },
                OvercloudRoleCount {
                    overcloud_role_id: 2,
                    num_nodes: 0
                },
            ]
        );
        assert!(format_roles(&["controller=x".to_string()]).is_err());
        assert!(format_roles(&["1=1".to_string(), "1=2".to_string()]).is_err());
    }

    #[test]
    fn capacities_need_three_fields() {
        let capacities = parse_capacities("total_cpu:64:CPU,total_memory:1024:MB").unwrap();
        assert_eq!(capacities.len(), 2);
        assert_eq!(capacities[1].name, "total_memory");
        assert_eq!(capacities[1].unit, "MB");
        assert!(parse_capacities("").unwrap().is_empty());
        assert!(matches!(
            parse_capacities("total_cpu:64").unwrap_err(),
            Error::MalformedCapacity { .. }
        ));
    }

    #[test]
    fn association_marshalling_is_three_way() {
        let mut map = serde_json::Map::new();
        marshal_association(&mut map, "resource_class", None).unwrap();
        assert!(!map.contains_key("resource_class"));

        marshal_association(&mut map, "resource_class", Some("")).unwrap();
        assert_eq!(map["resource_class"], Value::Null);

        marshal_association(&mut map, "resource_class", Some("42")).unwrap();
        assert_eq!(map["resource_class"], serde_json::json!({ "id": 42 }));

        assert!(marshal_association(&mut map, "resource_class", Some("forty")).is_err());
    }

    #[test]
    fn property_values_render_nested_attributes() {
        let value = serde_json::json!({
            "b": "two",
            "a": "one"
        });
        assert_eq!(property_value(&value), "a=one\nb=two");

        let list = serde_json::json!([
            { "name": "compute-1::count", "value": "3" },
            { "name": "compute-1::Flavor", "value": "baremetal" }
        ]);
        assert_eq!(
            property_value(&list),
            "name=compute-1::count\nvalue=3\n\nname=compute-1::Flavor\nvalue=baremetal"
        );
    }
}

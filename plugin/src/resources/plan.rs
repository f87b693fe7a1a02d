use crate::{
    operations::{List, PluginResult, Scale},
    resources::{
        error::{self, Error},
        utils,
        utils::{optional_cell, print_properties, print_table, CreateRow, GetHeaderRow, OutputFormat},
        CreatePlanArgs, GetPlanArgs, TemplatesArgs, UpdatePlanArgs,
    },
    rest_wrapper::RestClient,
};
use async_trait::async_trait;
use prettytable::Row;
use snafu::ResultExt;
use std::collections::BTreeMap;
use std::path::Path;
use tuskar_client::models::{self, ParameterValue, PlanParameter};

/// Plans resource.
#[derive(clap::Args, Debug)]
pub struct Plans {}

/// Plan resource.
#[derive(clap::Args, Debug)]
pub struct Plan {}

impl CreateRow for models::Plan {
    fn row(&self) -> Row {
        let roles = self
            .roles
            .iter()
            .map(|role| role.name.clone())
            .collect::<Vec<_>>()
            .join(", ");
        row![
            self.uuid,
            self.name,
            optional_cell(self.description.as_deref()),
            roles
        ]
    }
}

impl GetHeaderRow for models::Plan {
    fn get_header_row(&self) -> Row {
        (*utils::PLAN_HEADERS).clone()
    }
}

#[async_trait(?Send)]
impl List for Plans {
    async fn list(output: &OutputFormat) -> PluginResult {
        let plans = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .list()
            .await
            .context(error::ListPlansSnafu)?;
        print_table(output, plans);
        Ok(())
    }
}

/// Resolve a plan from a name or UUID.
///
/// A valid UUID is looked up directly first; anything else (or a UUID the
/// server does not know) is matched by name against the plan listing.
pub async fn find_plan(name_or_id: &str) -> Result<models::Plan, Error> {
    let plans = &RestClient::v2().context(error::WrongVersionSnafu)?.plans;

    if uuid::Uuid::parse_str(name_or_id).is_ok() {
        match plans.get(name_or_id).await {
            Ok(plan) => return Ok(plan),
            Err(tuskar_client::Error::NotFound { .. }) => {}
            Err(source) => {
                return Err(Error::GetPlan {
                    id: name_or_id.to_string(),
                    source,
                })
            }
        }
    }

    let listing = plans.list().await.context(error::ListPlansSnafu)?;
    let mut matches: Vec<_> = listing
        .into_iter()
        .filter(|plan| plan.name == name_or_id)
        .collect();
    match matches.len() {
        0 => error::ResourceNotFoundSnafu {
            resource: "plan",
            name: name_or_id,
        }
        .fail(),
        1 => Ok(matches.remove(0)),
        _ => error::MultipleMatchesSnafu {
            resource: "plan",
            name: name_or_id,
        }
        .fail(),
    }
}

/// The summary view keeps only the scale count parameters.
fn summarize(mut plan: models::Plan) -> models::Plan {
    plan.parameters
        .retain(|param| param.name.ends_with("::count"));
    plan
}

/// Filter parameters by a `::suffix` and strip the suffix from the names.
fn filter_parameters(parameters: &[PlanParameter], suffix: &str) -> BTreeMap<String, String> {
    let suffix = format!("::{suffix}");
    parameters
        .iter()
        .filter_map(|param| {
            param
                .name
                .strip_suffix(&suffix)
                .map(|name| (name.to_string(), param.value.clone()))
        })
        .collect()
}

impl Plan {
    /// Show an individual plan, as a summary unless verbose was asked for.
    pub async fn get(args: &GetPlanArgs, output: &OutputFormat) -> PluginResult {
        let plan = find_plan(args.plan()).await?;
        if args.verbose() {
            print_properties(output, plan);
        } else {
            print_properties(output, summarize(plan));
        }
        Ok(())
    }

    /// Show the scale counts of a plan.
    pub async fn get_scale(plan: &str, output: &OutputFormat) -> PluginResult {
        let plan = find_plan(plan).await?;
        print_properties(output, filter_parameters(&plan.parameters, "count"));
        Ok(())
    }

    /// Show the flavors assigned to the roles of a plan.
    pub async fn get_flavors(plan: &str, output: &OutputFormat) -> PluginResult {
        let plan = find_plan(plan).await?;
        print_properties(output, filter_parameters(&plan.parameters, "Flavor"));
        Ok(())
    }

    /// Create a new plan.
    pub async fn create(args: &CreatePlanArgs, output: &OutputFormat) -> PluginResult {
        let plan = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .create(&args.name, args.description.as_deref())
            .await
            .context(error::CreatePlanSnafu {
                name: args.name.clone(),
            })?;
        print_properties(output, summarize(plan));
        Ok(())
    }

    /// Change parameter values of an existing plan.
    pub async fn update(args: &UpdatePlanArgs, output: &OutputFormat) -> PluginResult {
        let parameters: Vec<ParameterValue> = utils::format_attributes(&args.parameters)?
            .into_iter()
            .map(|(name, value)| ParameterValue {
                name,
                value: match value {
                    serde_json::Value::String(value) => value,
                    other => other.to_string(),
                },
            })
            .collect();
        let plan = find_plan(&args.plan).await?;
        let updated = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .patch(&plan.uuid, &parameters)
            .await
            .context(error::UpdatePlanSnafu {
                id: plan.uuid.clone(),
            })?;
        print_properties(output, summarize(updated));
        Ok(())
    }

    /// Delete a plan.
    pub async fn delete(name_or_id: &str) -> PluginResult {
        let plan = find_plan(name_or_id).await?;
        RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .delete(&plan.uuid)
            .await
            .context(error::DeletePlanSnafu {
                id: plan.uuid.clone(),
            })?;
        println!("Deleted Plan \"{}\".", plan.name);
        Ok(())
    }

    /// Associate a role with a plan.
    pub async fn add_role(plan: &str, role: &str, output: &OutputFormat) -> PluginResult {
        let updated = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .add_role(plan, role)
            .await
            .context(error::AddPlanRoleSnafu { plan, role })?;
        print_properties(output, summarize(updated));
        Ok(())
    }

    /// Remove a role association from a plan.
    pub async fn remove_role(plan: &str, role: &str, output: &OutputFormat) -> PluginResult {
        let updated = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .remove_role(plan, role)
            .await
            .context(error::RemovePlanRoleSnafu { plan, role })?;
        print_properties(output, summarize(updated));
        Ok(())
    }

    /// Change the flavor of one role of a plan.
    pub async fn set_flavor(name_or_id: &str, role_name: &str, flavor: &str) -> PluginResult {
        let (plan_uuid, old) = role_parameter(name_or_id, role_name, "Flavor").await?;
        if old == flavor {
            println!("Keeping flavor {role_name} unchanged: {old}");
            return Ok(());
        }
        println!("Changing {role_name} flavor: {old} -> {flavor}");
        patch_role_parameter(&plan_uuid, role_name, "Flavor", flavor).await
    }

    /// Write the deployment templates of a plan into a directory.
    pub async fn templates(args: &TemplatesArgs) -> PluginResult {
        std::fs::create_dir_all(&args.output_dir).context(error::CreateDirSnafu {
            path: args.output_dir.display().to_string(),
        })?;

        let plan = find_plan(&args.plan).await?;
        let templates = RestClient::v2()
            .context(error::WrongVersionSnafu)?
            .plans
            .templates(&plan.uuid)
            .await
            .context(error::GetTemplatesSnafu {
                id: plan.uuid.clone(),
            })?;

        // Template names may carry directory components.
        let templates: BTreeMap<String, String> = templates.into_iter().collect();
        println!("The following templates will be written:");
        for (name, content) in templates {
            let path = args.output_dir.join(&name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).context(error::CreateDirSnafu {
                    path: parent.display().to_string(),
                })?;
            }
            write_template(&path, &content)?;
            println!("{}", path.display());
        }
        Ok(())
    }
}

fn write_template(path: &Path, content: &str) -> Result<(), Error> {
    std::fs::write(path, content).context(error::WriteTemplateSnafu {
        path: path.display().to_string(),
    })
}

/// Look up the current value of `{role}::{suffix}` in a plan, returning the
/// plan uuid alongside it.
async fn role_parameter(
    name_or_id: &str,
    role_name: &str,
    suffix: &str,
) -> Result<(String, String), Error> {
    let v2 = RestClient::v2().context(error::WrongVersionSnafu)?;
    let roles = v2.roles.list().await.context(error::ListRolesSnafu)?;
    let plan = find_plan(name_or_id).await?;

    let role = roles
        .iter()
        .find(|role| role.spec_name() == role_name)
        .ok_or_else(|| Error::NoSuchRole {
            role: role_name.to_string(),
        })?;
    let key = format!("{}::{suffix}", role.spec_name());
    let old = plan
        .parameters
        .iter()
        .find(|param| param.name == key)
        .map(|param| param.value.clone())
        .ok_or_else(|| Error::NoSuchRole {
            role: role_name.to_string(),
        })?;
    Ok((plan.uuid, old))
}

async fn patch_role_parameter(
    plan_uuid: &str,
    role_name: &str,
    suffix: &str,
    value: &str,
) -> PluginResult {
    let parameters = [ParameterValue {
        name: format!("{role_name}::{suffix}"),
        value: value.to_string(),
    }];
    RestClient::v2()
        .context(error::WrongVersionSnafu)?
        .plans
        .patch(plan_uuid, &parameters)
        .await
        .context(error::UpdatePlanSnafu { id: plan_uuid })?;
    Ok(())
}

#[async_trait(?Send)]
impl Scale for Plan {
    type ID = String;
    /// Scale a plan by changing the node count of one of its roles. A count
    /// equal to the current one sends no request.
    async fn scale(
        id: &Self::ID,
        role_name: &str,
        count: &str,
        _output: &OutputFormat,
    ) -> PluginResult {
        let (plan_uuid, old) = role_parameter(id, role_name, "count").await?;
        if old == count {
            println!("Keeping scale {role_name} count: {old}");
            return Ok(());
        }
        println!("Scaling {role_name} count: {old} -> {count}");
        patch_role_parameter(&plan_uuid, role_name, "count", count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use tuskar_client::{ApiVersion, AuthParams, Client};

    fn plan_json(uuid: &str, name: &str) -> serde_json::Value {
        json!({
            "uuid": uuid,
            "name": name,
            "roles": [{ "uuid": "r1", "name": "compute", "version": 1 }],
            "parameters": [
                { "name": "compute-1::count", "value": "2" },
                { "name": "compute-1::Flavor", "value": "baremetal" },
                { "name": "compute-1::Image", "value": "overcloud-compute" }
            ]
        })
    }

    #[test]
    fn summary_keeps_only_count_parameters() {
        let plan: models::Plan =
            serde_json::from_value(plan_json("p1", "overcloud")).unwrap();
        let summary = summarize(plan);
        assert_eq!(summary.parameters.len(), 1);
        assert_eq!(summary.parameters[0].name, "compute-1::count");
    }

    #[test]
    fn parameter_filter_strips_the_suffix() {
        let plan: models::Plan =
            serde_json::from_value(plan_json("p1", "overcloud")).unwrap();
        let scales = filter_parameters(&plan.parameters, "count");
        assert_eq!(scales.get("compute-1").map(String::as_str), Some("2"));
        let flavors = filter_parameters(&plan.parameters, "Flavor");
        assert_eq!(
            flavors.get("compute-1").map(String::as_str),
            Some("baremetal")
        );
    }

    #[test]
    fn plan_row_lists_role_names() {
        let plan: models::Plan =
            serde_json::from_value(plan_json("p1", "overcloud")).unwrap();
        let row = plan.row();
        assert_eq!(row.get_cell(3).unwrap().get_content(), "compute");
    }

    // The global client can only be initialised once per process, so all
    // lookup and scale paths share one mock server.
    #[tokio::test]
    async fn lookup_and_scale_through_a_mock_server() {
        let server = MockServer::start_async().await;
        let uuid = "11111111-2222-3333-4444-555555555555";
        server.mock(|when, then| {
            when.method(GET).path(format!("/v2/plans/{uuid}"));
            then.status(200).json_body(plan_json(uuid, "overcloud"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/v2/plans");
            then.status(200).json_body(json!([
                plan_json(uuid, "overcloud"),
                plan_json("p2", "twin"),
                plan_json("p3", "twin")
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/v2/roles");
            then.status(200)
                .json_body(json!([{ "uuid": "r1", "name": "compute", "version": 1 }]));
        });
        let patch = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path(format!("/v2/plans/{uuid}"))
                .json_body(json!([{ "name": "compute-1::count", "value": "5" }]));
            then.status(200).json_body(plan_json(uuid, "overcloud"));
        });

        let params = AuthParams::default();
        let client = Client::new(ApiVersion::V2, &server.base_url(), "token", &params).unwrap();
        RestClient::init_with_client(client).unwrap();

        // Lookup by uuid, by name, unknown name and ambiguous name.
        assert_eq!(find_plan(uuid).await.unwrap().name, "overcloud");
        assert_eq!(find_plan("overcloud").await.unwrap().uuid, uuid);
        assert!(matches!(
            find_plan("missing").await.unwrap_err(),
            Error::ResourceNotFound { .. }
        ));
        assert!(matches!(
            find_plan("twin").await.unwrap_err(),
            Error::MultipleMatches { .. }
        ));

        // A no-op scale sends no patch.
        Plan::scale(
            &"overcloud".to_string(),
            "compute-1",
            "2",
            &OutputFormat::None,
        )
        .await
        .unwrap();
        assert_eq!(patch.hits(), 0);

        // A real scale patches the count parameter.
        Plan::scale(
            &"overcloud".to_string(),
            "compute-1",
            "5",
            &OutputFormat::None,
        )
        .await
        .unwrap();
        patch.assert();

        // An unknown role fails without patching.
        assert!(matches!(
            Plan::scale(
                &"overcloud".to_string(),
                "controller-1",
                "3",
                &OutputFormat::None
            )
            .await
            .unwrap_err(),
            Error::NoSuchRole { .. }
        ));
        assert_eq!(patch.hits(), 1);

        // Templates land in the output directory, nested paths included.
        server.mock(|when, then| {
            when.method(GET).path(format!("/v2/plans/{uuid}/templates"));
            then.status(200).json_body(json!({
                "plan.yaml": "heat_template_version: 2014-10-16\n",
                "puppet/manifests/overcloud.pp": "include ::tripleo\n"
            }));
        });
        let dir = tempfile::tempdir().unwrap();
        let args = TemplatesArgs {
            plan: "overcloud".to_string(),
            output_dir: dir.path().join("templates"),
        };
        Plan::templates(&args).await.unwrap();
        assert!(args.output_dir.join("plan.yaml").is_file());
        let nested = std::fs::read_to_string(
            args.output_dir.join("puppet/manifests/overcloud.pp"),
        )
        .unwrap();
        assert_eq!(nested, "include ::tripleo\n");
    }
}

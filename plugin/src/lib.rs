#[macro_use]
extern crate prettytable;
#[macro_use]
extern crate lazy_static;

use crate::{
    operations::{Get, List, Operations, PluginResult, Scale},
    resources::{
        flavor, node, overcloud, overcloud_role, plan, rack, resource_class, role,
        AddRoleResources, CreateResources, DeleteResources, GetResources, RemoveRoleResources,
        ScaleResources, SetFlavorResources, TemplatesResources, UpdateResources,
    },
};
use std::time::Duration;
use tuskar_client::{ApiVersion, AuthParams};

pub mod operations;
pub mod resources;
pub mod rest_wrapper;

/// Every plugin operation must implement this trait to become composable.
#[async_trait::async_trait(?Send)]
pub trait ExecuteOperation {
    type Args;
    type Error;
    async fn execute(&self, cli_args: &Self::Args) -> Result<(), Self::Error>;
}

#[derive(clap::Parser, Debug)]
pub struct CliArgs {
    /// The Output, viz yaml, json.
    #[clap(global = true, default_value = resources::utils::OutputFormat::None.as_ref(), short, long)]
    pub output: resources::utils::OutputFormat,

    /// Identity account user name.
    #[clap(global = true, long, env = "OS_USERNAME")]
    pub os_username: Option<String>,

    /// Identity account password.
    #[clap(global = true, long, env = "OS_PASSWORD")]
    pub os_password: Option<String>,

    /// Tenant to authenticate as, by id.
    #[clap(global = true, long, env = "OS_TENANT_ID")]
    pub os_tenant_id: Option<String>,

    /// Tenant to authenticate as, by name.
    #[clap(global = true, long, env = "OS_TENANT_NAME")]
    pub os_tenant_name: Option<String>,

    /// Identity service endpoint.
    #[clap(global = true, long, env = "OS_AUTH_URL")]
    pub os_auth_url: Option<String>,

    /// Pre-existing token to authenticate with instead of credentials.
    #[clap(global = true, long, env = "OS_AUTH_TOKEN")]
    pub os_auth_token: Option<String>,

    /// Management API endpoint, skips catalog discovery.
    #[clap(global = true, long, env = "TUSKAR_URL")]
    pub tuskar_url: Option<String>,

    /// Service type to look up in the catalog.
    #[clap(global = true, long, env = "OS_SERVICE_TYPE")]
    pub os_service_type: Option<String>,

    /// Endpoint interface to look up in the catalog.
    #[clap(global = true, long, env = "OS_ENDPOINT_TYPE")]
    pub os_endpoint_type: Option<String>,

    /// The generation of the management API to speak.
    #[clap(global = true, long, env = "TUSKAR_API_VERSION", default_value = "1")]
    pub tuskar_api_version: ApiVersion,

    /// Explicitly allow insecure TLS connections.
    #[clap(global = true, long, default_value = "false")]
    pub insecure: bool,

    /// Timeout for the REST operations.
    #[clap(long, short, default_value = "10s")]
    pub timeout: humantime::Duration,

    /// The operation to be performed.
    #[clap(subcommand)]
    pub operations: Operations,
}

impl CliArgs {
    /// Ensure a usable set of authentication arguments was given before any
    /// request is attempted. Without a token the full credential set is
    /// required; with one, an endpoint or an identity URL suffices.
    pub fn ensure_auth_info(&self) -> Result<(), resources::Error> {
        if self.os_auth_token.is_none() {
            if self.os_username.is_none() {
                return Err(resources::Error::MissingUsername);
            }
            if self.os_password.is_none() {
                return Err(resources::Error::MissingPassword);
            }
            if self.os_tenant_id.is_none() && self.os_tenant_name.is_none() {
                return Err(resources::Error::MissingTenant);
            }
            if self.os_auth_url.is_none() {
                return Err(resources::Error::MissingAuthUrl);
            }
        } else if self.tuskar_url.is_none() && self.os_auth_url.is_none() {
            return Err(resources::Error::MissingEndpoint);
        }
        Ok(())
    }

    /// The authentication parameters for the client library.
    pub fn auth_params(&self) -> AuthParams {
        AuthParams {
            os_auth_token: self.os_auth_token.clone(),
            tuskar_url: self.tuskar_url.clone(),
            os_username: self.os_username.clone(),
            os_password: self.os_password.clone(),
            os_tenant_id: self.os_tenant_id.clone(),
            os_tenant_name: self.os_tenant_name.clone(),
            os_auth_url: self.os_auth_url.clone(),
            os_service_type: self.os_service_type.clone(),
            os_endpoint_type: self.os_endpoint_type.clone(),
            insecure: self.insecure,
            timeout: Duration::from(*self.timeout),
        }
    }
}

/// Initialise tracing from `RUST_LOG`, defaulting to info.
pub fn init_tracing() {
    if let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter("info").init();
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for Operations {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            Operations::Get(resource) => resource.execute(cli_args).await,
            Operations::Create(resource) => resource.execute(cli_args).await,
            Operations::Update(resource) => resource.execute(cli_args).await,
            Operations::Delete(resource) => resource.execute(cli_args).await,
            Operations::Scale(resource) => resource.execute(cli_args).await,
            Operations::SetFlavor(resource) => resource.execute(cli_args).await,
            Operations::AddRole(resource) => resource.execute(cli_args).await,
            Operations::RemoveRole(resource) => resource.execute(cli_args).await,
            Operations::Templates(resource) => resource.execute(cli_args).await,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for GetResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            GetResources::Plans => plan::Plans::list(&cli_args.output).await,
            GetResources::Plan(args) => plan::Plan::get(args, &cli_args.output).await,
            GetResources::PlanScale { plan } => {
                plan::Plan::get_scale(plan, &cli_args.output).await
            }
            GetResources::PlanFlavors { plan } => {
                plan::Plan::get_flavors(plan, &cli_args.output).await
            }
            GetResources::Roles => role::Roles::list(&cli_args.output).await,
            GetResources::Racks => rack::Racks::list(&cli_args.output).await,
            GetResources::Rack { id } => rack::Rack::get(id, &cli_args.output).await,
            GetResources::ResourceClasses => {
                resource_class::ResourceClasses::list(&cli_args.output).await
            }
            GetResources::ResourceClass { id } => {
                resource_class::ResourceClass::get(id, &cli_args.output).await
            }
            GetResources::Flavors { resource_class } => {
                flavor::Flavors::list(resource_class, &cli_args.output).await
            }
            GetResources::Flavor { resource_class, id } => {
                flavor::Flavor::get(resource_class, id, &cli_args.output).await
            }
            GetResources::Overclouds => overcloud::Overclouds::list(&cli_args.output).await,
            GetResources::Overcloud { id } => {
                overcloud::Overcloud::get(id, &cli_args.output).await
            }
            GetResources::OvercloudRoles => {
                overcloud_role::OvercloudRoles::list(&cli_args.output).await
            }
            GetResources::OvercloudRole { id } => {
                overcloud_role::OvercloudRole::get(id, &cli_args.output).await
            }
            GetResources::Nodes => node::Nodes::list(&cli_args.output).await,
            GetResources::Node { id } => node::Node::get(id, &cli_args.output).await,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for CreateResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            CreateResources::Plan(args) => plan::Plan::create(args, &cli_args.output).await,
            CreateResources::Rack(args) => rack::Rack::create(args, &cli_args.output).await,
            CreateResources::ResourceClass(args) => {
                resource_class::ResourceClass::create(args, &cli_args.output).await
            }
            CreateResources::Flavor(args) => flavor::Flavor::create(args, &cli_args.output).await,
            CreateResources::Overcloud(args) => {
                overcloud::Overcloud::create(args, &cli_args.output).await
            }
            CreateResources::OvercloudRole(args) => {
                overcloud_role::OvercloudRole::create(args, &cli_args.output).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for UpdateResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            UpdateResources::Plan(args) => plan::Plan::update(args, &cli_args.output).await,
            UpdateResources::Rack(args) => rack::Rack::update(args, &cli_args.output).await,
            UpdateResources::ResourceClass(args) => {
                resource_class::ResourceClass::update(args, &cli_args.output).await
            }
            UpdateResources::Flavor(args) => flavor::Flavor::update(args, &cli_args.output).await,
            UpdateResources::Overcloud(args) => {
                overcloud::Overcloud::update(args, &cli_args.output).await
            }
            UpdateResources::OvercloudRole(args) => {
                overcloud_role::OvercloudRole::update(args, &cli_args.output).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for DeleteResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, _cli_args: &CliArgs) -> PluginResult {
        match self {
            DeleteResources::Plan { plan } => plan::Plan::delete(plan).await,
            DeleteResources::Rack { id } => rack::Rack::delete(id).await,
            DeleteResources::ResourceClass { id } => {
                resource_class::ResourceClass::delete(id).await
            }
            DeleteResources::Flavor { resource_class, id } => {
                flavor::Flavor::delete(resource_class, id).await
            }
            DeleteResources::Overcloud { id } => overcloud::Overcloud::delete(id).await,
            DeleteResources::OvercloudRole { id } => {
                overcloud_role::OvercloudRole::delete(id).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for ScaleResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            ScaleResources::Plan(args) => {
                plan::Plan::scale(&args.plan, &args.role_name, &args.count, &cli_args.output)
                    .await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for SetFlavorResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, _cli_args: &CliArgs) -> PluginResult {
        match self {
            SetFlavorResources::Plan(args) => {
                plan::Plan::set_flavor(&args.plan, &args.role_name, &args.flavor).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for AddRoleResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            AddRoleResources::Plan { plan, role } => {
                plan::Plan::add_role(plan, role, &cli_args.output).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for RemoveRoleResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, cli_args: &CliArgs) -> PluginResult {
        match self {
            RemoveRoleResources::Plan { plan, role } => {
                plan::Plan::remove_role(plan, role, &cli_args.output).await
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ExecuteOperation for TemplatesResources {
    type Args = CliArgs;
    type Error = resources::Error;
    async fn execute(&self, _cli_args: &CliArgs) -> PluginResult {
        match self {
            TemplatesResources::Plan(args) => plan::Plan::templates(args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(args)
    }

    #[test]
    fn auth_precheck_requires_credentials_without_a_token() {
        let args = parse(&["tuskar", "get", "plans"]).unwrap();
        assert!(matches!(
            args.ensure_auth_info(),
            Err(resources::Error::MissingUsername)
        ));

        let args = parse(&["tuskar", "--os-username", "admin", "get", "plans"]).unwrap();
        assert!(matches!(
            args.ensure_auth_info(),
            Err(resources::Error::MissingPassword)
        ));

        let args = parse(&[
            "tuskar",
            "--os-username",
            "admin",
            "--os-password",
            "devpass",
            "get",
            "plans",
        ])
        .unwrap();
        assert!(matches!(
            args.ensure_auth_info(),
            Err(resources::Error::MissingTenant)
        ));

        let args = parse(&[
            "tuskar",
            "--os-username",
            "admin",
            "--os-password",
            "devpass",
            "--os-tenant-name",
            "demo",
            "get",
            "plans",
        ])
        .unwrap();
        assert!(matches!(
            args.ensure_auth_info(),
            Err(resources::Error::MissingAuthUrl)
        ));
    }

    #[test]
    fn auth_precheck_with_a_token_needs_an_endpoint() {
        let args = parse(&["tuskar", "--os-auth-token", "secret", "get", "plans"]).unwrap();
        assert!(matches!(
            args.ensure_auth_info(),
            Err(resources::Error::MissingEndpoint)
        ));

        let args = parse(&[
            "tuskar",
            "--os-auth-token",
            "secret",
            "--tuskar-url",
            "http://tuskar:8585",
            "get",
            "plans",
        ])
        .unwrap();
        assert!(args.ensure_auth_info().is_ok());
    }

    #[test]
    fn api_version_flag_parses_all_generations() {
        let args = parse(&["tuskar", "--tuskar-api-version", "2", "get", "plans"]).unwrap();
        assert_eq!(args.tuskar_api_version, ApiVersion::V2);
        let args = parse(&["tuskar", "--tuskar-api-version", "1.0", "get", "racks"]).unwrap();
        assert_eq!(args.tuskar_api_version, ApiVersion::V1);
        assert!(parse(&["tuskar", "--tuskar-api-version", "3", "get", "plans"]).is_err());
    }

    #[test]
    fn auth_params_carry_the_timeout() {
        let args = parse(&[
            "tuskar",
            "--os-auth-token",
            "secret",
            "--tuskar-url",
            "http://tuskar:8585",
            "--timeout",
            "30s",
            "get",
            "plans",
        ])
        .unwrap();
        let params = args.auth_params();
        assert_eq!(params.timeout, Duration::from_secs(30));
        assert_eq!(params.tuskar_url.as_deref(), Some("http://tuskar:8585"));
    }
}

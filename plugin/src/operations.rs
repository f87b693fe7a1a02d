use crate::resources::{
    error::Error, utils, AddRoleResources, CreateResources, DeleteResources, GetResources,
    RemoveRoleResources, ScaleResources, SetFlavorResources, TemplatesResources, UpdateResources,
};
use async_trait::async_trait;

/// Result wrapper for plugin commands.
pub type PluginResult = Result<(), Error>;

/// The types of operations that are supported.
#[derive(clap::Subcommand, Debug)]
pub enum Operations {
    /// 'Get' resources.
    #[clap(subcommand)]
    Get(GetResources),
    /// 'Create' resources.
    #[clap(subcommand)]
    Create(CreateResources),
    /// 'Update' resources.
    #[clap(subcommand)]
    Update(UpdateResources),
    /// 'Delete' resources.
    #[clap(subcommand)]
    Delete(DeleteResources),
    /// 'Scale' a role of a plan.
    #[clap(subcommand)]
    Scale(ScaleResources),
    /// 'Set flavor' of a role of a plan.
    #[clap(subcommand)]
    SetFlavor(SetFlavorResources),
    /// 'Add role' to a plan.
    #[clap(subcommand)]
    AddRole(AddRoleResources),
    /// 'Remove role' from a plan.
    #[clap(subcommand)]
    RemoveRole(RemoveRoleResources),
    /// 'Templates' of a plan.
    #[clap(subcommand)]
    Templates(TemplatesResources),
}

/// List trait.
/// To be implemented by resources which support the 'list' operation.
#[async_trait(?Send)]
pub trait List {
    async fn list(output: &utils::OutputFormat) -> PluginResult;
}

/// Get trait.
/// To be implemented by resources which support the 'get' operation.
#[async_trait(?Send)]
pub trait Get {
    type ID;
    async fn get(id: &Self::ID, output: &utils::OutputFormat) -> PluginResult;
}

/// Scale trait.
/// To be implemented by resources which support the 'scale' operation.
#[async_trait(?Send)]
pub trait Scale {
    type ID;
    async fn scale(
        id: &Self::ID,
        role_name: &str,
        count: &str,
        output: &utils::OutputFormat,
    ) -> PluginResult;
}

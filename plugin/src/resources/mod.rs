pub mod error;
pub mod flavor;
pub mod node;
pub mod overcloud;
pub mod overcloud_role;
pub mod plan;
pub mod rack;
pub mod resource_class;
pub mod role;
pub mod utils;

pub use error::Error;

/// The types of resources that support the 'get' operation.
#[derive(clap::Subcommand, Debug)]
pub enum GetResources {
    /// Get all plans.
    Plans,
    /// Get the plan with the given name or UUID.
    Plan(GetPlanArgs),
    /// Get the scale counts of a plan.
    PlanScale {
        /// Name or UUID of the plan.
        plan: String,
    },
    /// Get the flavors assigned to the roles of a plan.
    PlanFlavors {
        /// Name or UUID of the plan.
        plan: String,
    },
    /// Get all roles.
    Roles,
    /// Get all racks.
    Racks,
    /// Get the rack with the given name or ID.
    Rack { id: String },
    /// Get all resource classes.
    ResourceClasses,
    /// Get the resource class with the given name or ID.
    ResourceClass { id: String },
    /// Get the flavors of a resource class.
    Flavors {
        /// ID of the resource class the flavors belong to.
        resource_class: String,
    },
    /// Get a flavor of a resource class.
    Flavor {
        /// ID of the resource class the flavor belongs to.
        resource_class: String,
        id: String,
    },
    /// Get all overclouds.
    Overclouds,
    /// Get the overcloud with the given name or ID.
    Overcloud { id: String },
    /// Get all overcloud roles.
    OvercloudRoles,
    /// Get the overcloud role with the given name or ID.
    OvercloudRole { id: String },
    /// Get all nodes.
    Nodes,
    /// Get the node with the given ID.
    Node { id: String },
}

/// Arguments used when getting a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct GetPlanArgs {
    /// Name or UUID of the plan.
    plan: String,
    /// Display full plan details instead of the scale count summary.
    #[clap(long, default_value = "false")]
    verbose: bool,
}

impl GetPlanArgs {
    /// Return the plan name or UUID.
    pub fn plan(&self) -> &str {
        &self.plan
    }
    /// Return whether to display full plan details.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// The types of resources that support the 'create' operation.
#[derive(clap::Subcommand, Debug)]
pub enum CreateResources {
    /// Create a new plan.
    Plan(CreatePlanArgs),
    /// Create a new rack.
    Rack(CreateRackArgs),
    /// Create a new resource class.
    ResourceClass(CreateResourceClassArgs),
    /// Create a new flavor within a resource class.
    Flavor(CreateFlavorArgs),
    /// Create a new overcloud.
    Overcloud(CreateOvercloudArgs),
    /// Create a new overcloud role.
    OvercloudRole(CreateOvercloudRoleArgs),
}

/// Arguments used when creating a rack.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateRackArgs {
    /// Name of the rack to create.
    pub name: String,
    /// Rack's network in IP/CIDR notation.
    #[clap(long, required = true)]
    pub subnet: String,
    /// Number of slots in the rack.
    #[clap(long, required = true)]
    pub slots: i64,
    /// Total capacities of the rack, as name:value:unit triples separated by
    /// commas.
    #[clap(long)]
    pub capacities: Option<String>,
    /// Resource class to assign the rack to.
    #[clap(long)]
    pub resource_class: Option<String>,
}

/// Arguments used when creating a resource class.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateResourceClassArgs {
    /// Name of the resource class to create.
    pub name: String,
    /// Service type of the resource class.
    #[clap(long)]
    pub service_type: Option<String>,
}

/// Arguments used when creating a flavor.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateFlavorArgs {
    /// ID of the resource class the flavor belongs to.
    pub resource_class: String,
    /// Name of the flavor to create.
    pub name: String,
    /// Capacities of the flavor, as name:value:unit triples separated by
    /// commas.
    #[clap(long)]
    pub capacities: Option<String>,
    /// Maximum number of VMs the flavor can host.
    #[clap(long)]
    pub max_vms: Option<i64>,
}

/// Arguments used when creating an overcloud.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateOvercloudArgs {
    /// Name of the overcloud to create.
    pub name: String,
    /// User-readable text describing the overcloud.
    #[clap(long, short)]
    pub description: Option<String>,
    /// UID of the stack in the orchestration service.
    #[clap(long, short)]
    pub stack_id: Option<String>,
    /// Overcloud attribute in the key=value format, can be given multiple
    /// times.
    #[clap(long = "attribute", short = 'A')]
    pub attributes: Vec<String>,
    /// Node count for one role in the role_id=count format, can be given
    /// multiple times.
    #[clap(long = "role-count", short = 'R')]
    pub roles: Vec<String>,
}

/// Arguments used when creating an overcloud role.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateOvercloudRoleArgs {
    /// Name of the overcloud role to create.
    pub name: String,
    /// User-readable text describing the overcloud role.
    #[clap(long, short)]
    pub description: Option<String>,
    /// Name of the image to deploy on nodes of this role.
    #[clap(long, short)]
    pub image_name: Option<String>,
    /// Flavor of nodes this role deploys to.
    #[clap(long, short)]
    pub flavor_id: Option<String>,
}

/// Arguments used when creating a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct CreatePlanArgs {
    /// Name of the plan to create.
    pub name: String,
    /// User-readable text describing the plan.
    #[clap(long, short)]
    pub description: Option<String>,
}

/// Arguments used when updating a rack.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateRackArgs {
    /// Name or ID of the rack.
    pub id: String,
    /// Rack's updated name.
    #[clap(long)]
    pub name: Option<String>,
    /// Rack's network in IP/CIDR notation.
    #[clap(long)]
    pub subnet: Option<String>,
    /// Number of slots in the rack.
    #[clap(long)]
    pub slots: Option<i64>,
    /// Total capacities of the rack, as name:value:unit triples separated by
    /// commas.
    #[clap(long)]
    pub capacities: Option<String>,
    /// Resource class to assign the rack to, an empty value clears the
    /// assignment.
    #[clap(long)]
    pub resource_class: Option<String>,
}

/// Arguments used when updating a resource class.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateResourceClassArgs {
    /// Name or ID of the resource class.
    pub id: String,
    /// Resource class's updated name.
    #[clap(long)]
    pub name: Option<String>,
    /// Service type of the resource class.
    #[clap(long)]
    pub service_type: Option<String>,
}

/// Arguments used when updating a flavor.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateFlavorArgs {
    /// ID of the resource class the flavor belongs to.
    pub resource_class: String,
    /// Name or ID of the flavor.
    pub id: String,
    /// Flavor's updated name.
    #[clap(long)]
    pub name: Option<String>,
    /// Capacities of the flavor, as name:value:unit triples separated by
    /// commas.
    #[clap(long)]
    pub capacities: Option<String>,
    /// Maximum number of VMs the flavor can host.
    #[clap(long)]
    pub max_vms: Option<i64>,
}

/// Arguments used when updating an overcloud.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateOvercloudArgs {
    /// Name or ID of the overcloud.
    pub id: String,
    /// Overcloud's updated name.
    #[clap(long, short)]
    pub name: Option<String>,
    /// User-readable text describing the overcloud.
    #[clap(long, short)]
    pub description: Option<String>,
    /// UID of the stack in the orchestration service.
    #[clap(long, short)]
    pub stack_id: Option<String>,
    /// Overcloud attribute in the key=value format, can be given multiple
    /// times.
    #[clap(long = "attribute", short = 'A')]
    pub attributes: Vec<String>,
    /// Node count for one role in the role_id=count format, can be given
    /// multiple times.
    #[clap(long = "role-count", short = 'R')]
    pub roles: Vec<String>,
}

/// Arguments used when updating an overcloud role.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateOvercloudRoleArgs {
    /// Name or ID of the overcloud role.
    pub id: String,
    /// Overcloud role's updated name.
    #[clap(long, short)]
    pub name: Option<String>,
    /// User-readable text describing the overcloud role.
    #[clap(long, short)]
    pub description: Option<String>,
    /// Name of the image to deploy on nodes of this role.
    #[clap(long, short)]
    pub image_name: Option<String>,
    /// Flavor of nodes this role deploys to.
    #[clap(long, short)]
    pub flavor_id: Option<String>,
}

/// The types of resources that support the 'update' operation.
#[derive(clap::Subcommand, Debug)]
pub enum UpdateResources {
    /// Update parameters of a plan.
    Plan(UpdatePlanArgs),
    /// Update a rack.
    Rack(UpdateRackArgs),
    /// Update a resource class.
    ResourceClass(UpdateResourceClassArgs),
    /// Update a flavor of a resource class.
    Flavor(UpdateFlavorArgs),
    /// Update an overcloud.
    Overcloud(UpdateOvercloudArgs),
    /// Update an overcloud role.
    OvercloudRole(UpdateOvercloudRoleArgs),
}

/// Arguments used when updating a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdatePlanArgs {
    /// Name or UUID of the plan to update.
    pub plan: String,
    /// Parameter in the key=value format, can be given multiple times.
    #[clap(long = "parameter", short = 'P', required = true)]
    pub parameters: Vec<String>,
}

/// The types of resources that support the 'delete' operation.
#[derive(clap::Subcommand, Debug)]
pub enum DeleteResources {
    /// Delete the plan with the given name or UUID.
    Plan { plan: String },
    /// Delete the rack with the given name or ID.
    Rack { id: String },
    /// Delete the resource class with the given name or ID.
    ResourceClass { id: String },
    /// Delete a flavor of a resource class.
    Flavor {
        /// ID of the resource class the flavor belongs to.
        resource_class: String,
        id: String,
    },
    /// Delete the overcloud with the given name or ID.
    Overcloud { id: String },
    /// Delete the overcloud role with the given name or ID.
    OvercloudRole { id: String },
}

/// The types of resources that support the 'scale' operation.
#[derive(clap::Subcommand, Debug)]
pub enum ScaleResources {
    /// Scale a plan by changing the node count of one of its roles.
    Plan(ScalePlanArgs),
}

/// Arguments used when scaling a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct ScalePlanArgs {
    /// Name or UUID of the plan to modify.
    pub plan: String,
    /// Name of the role to scale, in the name-version format.
    pub role_name: String,
    /// Count of nodes to be set.
    #[clap(long, short = 'C', required = true)]
    pub count: String,
}

/// The types of resources that support the 'set-flavor' operation.
#[derive(clap::Subcommand, Debug)]
pub enum SetFlavorResources {
    /// Change the flavor of a role in a plan.
    Plan(SetFlavorArgs),
}

/// Arguments used when changing the flavor of a role in a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct SetFlavorArgs {
    /// Name or UUID of the plan to modify.
    pub plan: String,
    /// Name of the role to flavor, in the name-version format.
    pub role_name: String,
    /// Flavor which shall be assigned to the role.
    #[clap(long, short = 'F', required = true)]
    pub flavor: String,
}

/// The types of resources that support the 'add-role' operation.
#[derive(clap::Subcommand, Debug)]
pub enum AddRoleResources {
    /// Associate a role with a plan.
    Plan {
        /// UUID of the plan to assign the role to.
        plan: String,
        /// UUID of the role to be assigned.
        #[clap(long = "role-uuid", short = 'r', required = true)]
        role: String,
    },
}

/// The types of resources that support the 'remove-role' operation.
#[derive(clap::Subcommand, Debug)]
pub enum RemoveRoleResources {
    /// Remove a role association from a plan.
    Plan {
        /// UUID of the plan to remove the role from.
        plan: String,
        /// UUID of the role to be removed.
        #[clap(long = "role-uuid", short = 'r', required = true)]
        role: String,
    },
}

/// The types of resources that support the 'templates' operation.
#[derive(clap::Subcommand, Debug)]
pub enum TemplatesResources {
    /// Write the deployment templates of a plan to a directory.
    Plan(TemplatesArgs),
}

/// Arguments used when downloading the templates of a plan.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplatesArgs {
    /// Name or UUID of the plan whose templates will be retrieved.
    pub plan: String,
    /// Directory to write template files into, created if it does not exist.
    #[clap(long = "output-dir", short = 'O', required = true)]
    pub output_dir: std::path::PathBuf,
}

use snafu::Snafu;

/// All errors returned when a resource command fails.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Error when the API client could not be constructed.
    #[snafu(display("Failed to set up the API client. Error {source}"))]
    ClientSetup { source: tuskar_client::Error },

    /// Error when an operation needs an API generation the client is not
    /// speaking.
    #[snafu(display("{source}"))]
    WrongVersion { source: tuskar_client::Error },

    /// Error when list plans request fails.
    #[snafu(display("Failed to list plans. Error {source}"))]
    ListPlans { source: tuskar_client::Error },
    /// Error when get plan request fails.
    #[snafu(display("Failed to get plan {id}. Error {source}"))]
    GetPlan {
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when create plan request fails.
    #[snafu(display("Failed to create plan {name}. Error {source}"))]
    CreatePlan {
        name: String,
        source: tuskar_client::Error,
    },
    /// Error when patch plan request fails.
    #[snafu(display("Failed to update plan {id}. Error {source}"))]
    UpdatePlan {
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when delete plan request fails.
    #[snafu(display("Failed to delete plan {id}. Error {source}"))]
    DeletePlan {
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when role association request fails.
    #[snafu(display("Failed to add role {role} to plan {plan}. Error {source}"))]
    AddPlanRole {
        plan: String,
        role: String,
        source: tuskar_client::Error,
    },
    /// Error when role removal request fails.
    #[snafu(display("Failed to remove role {role} from plan {plan}. Error {source}"))]
    RemovePlanRole {
        plan: String,
        role: String,
        source: tuskar_client::Error,
    },
    /// Error when the templates request fails.
    #[snafu(display("Failed to get templates of plan {id}. Error {source}"))]
    GetTemplates {
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when list roles request fails.
    #[snafu(display("Failed to list roles. Error {source}"))]
    ListRoles { source: tuskar_client::Error },

    /// Error when a v1 list request fails.
    #[snafu(display("Failed to list {resource}s. Error {source}"))]
    ListResource {
        resource: &'static str,
        source: tuskar_client::Error,
    },
    /// Error when a v1 get request fails.
    #[snafu(display("Failed to get {resource} {id}. Error {source}"))]
    GetResource {
        resource: &'static str,
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when a v1 create request fails.
    #[snafu(display("Failed to create {resource}. Error {source}"))]
    CreateResource {
        resource: &'static str,
        source: tuskar_client::Error,
    },
    /// Error when a v1 update request fails.
    #[snafu(display("Failed to update {resource} {id}. Error {source}"))]
    UpdateResource {
        resource: &'static str,
        id: String,
        source: tuskar_client::Error,
    },
    /// Error when a v1 delete request fails.
    #[snafu(display("Failed to delete {resource} {id}. Error {source}"))]
    DeleteResource {
        resource: &'static str,
        id: String,
        source: tuskar_client::Error,
    },

    /// Error when a name-or-id lookup matches nothing.
    #[snafu(display("No {resource} with a name or ID of '{name}' exists"))]
    ResourceNotFound {
        resource: &'static str,
        name: String,
    },
    /// Error when a name-or-id lookup is ambiguous.
    #[snafu(display("Multiple instances of {resource} with name '{name}' exist"))]
    MultipleMatches {
        resource: &'static str,
        name: String,
    },
    /// Error when a scale or flavor change names a role the plan's role list
    /// does not carry.
    #[snafu(display("No roles were found in the Plan with the name {role}"))]
    NoSuchRole { role: String },

    /// Error when a key=value argument does not split.
    #[snafu(display("Malformed parameter({param}). Use the key=value format."))]
    MalformedParameter { param: String },
    /// Error when a key is given more than once.
    #[snafu(display("The attribute name {key} can't be given twice."))]
    DuplicateKey { key: String },
    /// Error when a capacity string is not three colon separated fields.
    #[snafu(display(
        "Capacity info \"{capacity}\" should be 3 fields separated by colons. \
        (Use commas to separate multiple capacities.)"
    ))]
    MalformedCapacity { capacity: String },
    /// Error when a role count argument is not numeric.
    #[snafu(display("Malformed role count({param}). Use the role_id=count format."))]
    MalformedRoleCount { param: String },
    /// Error when an association argument is not a numeric id.
    #[snafu(display("Malformed association({value}). Use a numeric id."))]
    MalformedAssociation { value: String },

    /// Error when the template output directory could not be created.
    #[snafu(display("Failed to create directory {path}. Error {source}"))]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    /// Error when a template file could not be written.
    #[snafu(display("Failed to write template {path}. Error {source}"))]
    WriteTemplate {
        path: String,
        source: std::io::Error,
    },

    #[snafu(display("You must provide username via either --os-username or env[OS_USERNAME]"))]
    MissingUsername,
    #[snafu(display("You must provide password via either --os-password or env[OS_PASSWORD]"))]
    MissingPassword,
    #[snafu(display(
        "You must provide tenant via either --os-tenant-name or --os-tenant-id \
        or env[OS_TENANT_NAME] or env[OS_TENANT_ID]"
    ))]
    MissingTenant,
    #[snafu(display("You must provide auth URL via either --os-auth-url or env[OS_AUTH_URL]"))]
    MissingAuthUrl,
    #[snafu(display(
        "You must provide either --tuskar-url or --os-auth-url \
        or env[TUSKAR_URL] or env[OS_AUTH_URL]"
    ))]
    MissingEndpoint,
}

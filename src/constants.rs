/// Base URL of the Superclouds REST API used when `SUPER_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "https://api.superclouds.com";
/// Server certificates are not verified unless told otherwise
pub const DEFAULT_ACCEPT_INVALID_CERTS: bool = true;
/// User agent string used in HTTP requests to identify this client to the Superclouds API
pub const USER_AGENT: &str = concat!("superclouds/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the path to the client certificate (PEM)
pub const ENV_CERT_PATH: &str = "SUPER_CERT";
/// Environment variable holding the path to the client private key (PEM)
pub const ENV_KEY_PATH: &str = "SUPER_KEY";
/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "SUPER_TOKEN";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "SUPER_URL";
/// Environment variable setting an optional per-request deadline in seconds
pub const ENV_TIMEOUT: &str = "SUPER_TIMEOUT";
/// Environment variable controlling server certificate verification
pub const ENV_INSECURE_SKIP_VERIFY: &str = "SUPER_INSECURE_SKIP_VERIFY";
/// Environment variable holding an extra trusted root certificate (PEM)
pub const ENV_CA_CERT: &str = "SUPER_CA_CERT";

/// Collection endpoint: list, create and delete users
pub const USERS_PATH: &str = "/users";
/// Authenticated user endpoint: get and update
pub const USER_PATH: &str = "/user";
/// Available roles
pub const ROLES_PATH: &str = "/users/roles";
/// Role assignment
pub const ROLE_PATH: &str = "/users/role";
/// Password change for the authenticated user
pub const CHANGE_PASSWORD_PATH: &str = "/change-password";

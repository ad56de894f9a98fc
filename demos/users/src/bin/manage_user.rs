use std::env;
use superclouds::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    load_dotenv();

    let email = env::args()
        .nth(1)
        .unwrap_or_else(|| "new.user@example.com".to_string());
    let role = env::args().nth(2).unwrap_or_else(|| "MODIFY".to_string());

    let http_client = Arc::new(HttpClient::from_env()?);
    if http_client.accepts_invalid_certs() {
        warn!("Set SUPER_INSECURE_SKIP_VERIFY=false to verify the server certificate");
    }
    let client = UsersClient::new(http_client);

    let created = client.create_user(&CreateUserRequest::new(&email)).await?;
    info!("Created user: {}", created);

    let roles = client.list_roles().await?;
    if !roles.contains(&role) {
        warn!("Role {} is not one of {:?}; the server will decide", role, roles.roles);
    }
    client
        .update_user_role(&UpdateUserRoleRequest::new(&email, &role))
        .await?;
    info!("Assigned role {} to {}", role, email);

    client.delete_user(&DeleteUserRequest::new(&email)).await?;
    info!("Deleted user {}", email);

    Ok(())
}

use std::env;
use superclouds::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    load_dotenv();

    let client = UsersClient::from_env()?;

    let update = UpdateUserRequest::new()
        .with_first_name("John")
        .with_last_name("Doe")
        .with_contact("999XXXX999");
    let user = client.update_user(&update).await?;
    info!("Updated user: {}", user);

    if let (Ok(current), Ok(new)) = (env::var("CURRENT_PASSWORD"), env::var("NEW_PASSWORD")) {
        client
            .change_password(&ChangePasswordRequest::new(current, new.clone(), new))
            .await?;
        info!("Password changed");
    }

    Ok(())
}

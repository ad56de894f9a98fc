use superclouds::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    load_dotenv();

    info!("Starting list users example");
    let client = UsersClient::from_env()?;

    let roles = client.list_roles().await?;
    info!("Available roles: {:?}", roles.roles);

    let me = client.get_user().await?;
    info!("Authenticated as {} ({})", me.display_name(), me.role);

    let mut page: u32 = 1;
    loop {
        let input = ListUsersRequest::new().with_size(10).with_page(page);
        let resp = client.list_users(&input).await?;
        for user in resp.users() {
            info!("{} <{}> {}", user.display_name(), user.email, user.role);
        }
        if resp.users().is_empty() || !resp.has_page_after(page) {
            info!("{} users in total", resp.total);
            break;
        }
        page += 1;
    }

    Ok(())
}

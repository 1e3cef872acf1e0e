use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use deskrelay_core::{
    client::HelpdeskClient,
    constants::{CREDENTIALS_FILE_NAME, TEMPLATES_FILE_NAME},
    obj::Credentials,
};
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{config::deskrelay_server_config, error::StartupError};

/// template name -> opaque template body, as read from templates.json
pub(crate) type TemplateMap = Map<String, Value>;

/// user display name -> vendor user id, load-once and process-lifetime-static
pub(crate) type UserDirectory = HashMap<String, u64>;

static CLIENT: OnceCell<HelpdeskClient> = OnceCell::new();
static TEMPLATES: OnceCell<TemplateMap> = OnceCell::new();
static USER_DIRECTORY: OnceCell<UserDirectory> = OnceCell::new();

pub(crate) fn helpdesk_client() -> &'static HelpdeskClient {
    CLIENT.get().expect("pls init deskrelay stores first")
}

pub(crate) fn templates() -> &'static TemplateMap {
    TEMPLATES.get().expect("pls init deskrelay stores first")
}

pub(crate) fn user_directory() -> &'static UserDirectory {
    USER_DIRECTORY
        .get()
        .expect("pls init deskrelay stores first")
}

pub(crate) async fn load_credentials(root: &Path) -> Result<Credentials, StartupError> {
    let path = root.join(CREDENTIALS_FILE_NAME);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| StartupError::Config(format!("read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| StartupError::Config(format!("parse {}: {}", path.display(), e)))
}

pub(crate) async fn load_templates(root: &Path) -> Result<TemplateMap, StartupError> {
    let path = root.join(TEMPLATES_FILE_NAME);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| StartupError::Config(format!("read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| StartupError::Config(format!("parse {}: {}", path.display(), e)))
}

async fn prefetch_directory(client: &HelpdeskClient) -> Result<UserDirectory, StartupError> {
    let resp = client
        .list_users()
        .await
        .map_err(|e| StartupError::Remote(format!("list users: {}", e)))?;

    Ok(resp
        .users
        .into_iter()
        .map(|user| (user.name, user.id))
        .collect())
}

/// ordered store initialization; any Config failure here must keep the
/// listener from ever binding
pub(crate) async fn init_stores() -> Result<(), StartupError> {
    let config = deskrelay_server_config();
    let root = PathBuf::from(&config.root_path);

    let credentials = load_credentials(&root).await?;
    info!("loaded credentials for {}", credentials.sub_domain);

    let client = HelpdeskClient::new(&credentials)
        .map_err(|e| StartupError::Config(format!("build helpdesk client: {}", e)))?;

    let templates = load_templates(&root).await?;
    info!("loaded {} templates", templates.len());

    let directory = if config.prefetch_users {
        match prefetch_directory(&client).await {
            Ok(directory) => {
                info!("fetched {} directory users", directory.len());
                directory
            }
            Err(e) => {
                // degrade: the form renders without a user directory
                error!("user directory prefetch failed: {}", e);
                UserDirectory::new()
            }
        }
    } else {
        UserDirectory::new()
    };

    CLIENT
        .set(client)
        .expect("stores can only be initialized once");
    TEMPLATES
        .set(templates)
        .expect("stores can only be initialized once");
    USER_DIRECTORY
        .set(directory)
        .expect("stores can only be initialized once");

    Ok(())
}

use once_cell::sync::OnceCell;

#[derive(Debug)]
pub struct DeskrelayServerConfig {
    /// application root holding credentials.json, templates.json and views/
    pub root_path: String,
    /// query the vendor user directory once during startup
    pub prefetch_users: bool,
}

static DESKRELAY_CONFIG: OnceCell<DeskrelayServerConfig> = OnceCell::new();

pub(crate) fn deskrelay_server_config() -> &'static DeskrelayServerConfig {
    DESKRELAY_CONFIG
        .get()
        .expect("pls init deskrelay server config first")
}

pub fn init_deskrelay_server_config(config: DeskrelayServerConfig) {
    DESKRELAY_CONFIG
        .set(config)
        .expect("config can only be set once");
}

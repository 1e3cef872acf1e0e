use once_cell::sync::OnceCell;

#[derive(Debug)]
pub(crate) struct DeskrelayConfig {
    pub api_port: u16,
}

static DESKRELAY_CONFIG: OnceCell<DeskrelayConfig> = OnceCell::new();

pub(crate) fn deskrelay_config() -> &'static DeskrelayConfig {
    DESKRELAY_CONFIG
        .get()
        .expect("pls init deskrelay config first")
}

pub(crate) fn init_deskrelay_config(config: DeskrelayConfig) {
    DESKRELAY_CONFIG
        .set(config)
        .expect("config can only be set once");
}

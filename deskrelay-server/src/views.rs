use std::path::PathBuf;

use deskrelay_core::constants::VIEWS_DIR_NAME;
use minijinja::{path_loader, Environment};
use minijinja_autoreload::AutoReloader;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::deskrelay_server_config;

pub struct Engine(AutoReloader);

impl Engine {
    pub fn new(views_path: &PathBuf) -> Engine {
        let views_path = views_path.to_owned();
        let reloader = AutoReloader::new(move |notifier| {
            let mut env = Environment::new();
            env.set_loader(path_loader(&views_path));
            notifier.set_fast_reload(true);
            notifier.watch_path(&views_path, true);
            Ok(env)
        });

        Engine(reloader)
    }

    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> anyhow::Result<String> {
        let env = self.0.acquire_env()?;
        let tmpl = env.get_template(template_name)?;
        tmpl.render(ctx).map_err(|err| err.into())
    }
}

static ENGINE: OnceCell<Engine> = OnceCell::new();

pub(crate) fn view_engine() -> &'static Engine {
    ENGINE.get().expect("pls init view engine first")
}

pub(crate) fn init_view_engine() {
    let config = deskrelay_server_config();
    let views_path = PathBuf::from(&config.root_path).join(VIEWS_DIR_NAME);
    ENGINE.get_or_init(|| Engine::new(&views_path));
}

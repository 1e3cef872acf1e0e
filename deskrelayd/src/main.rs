use clap::Parser;
use deskrelay_core::constants::{DESKRELAY_DEFAULT_API_PORT, DESKRELAY_DEFAULT_ROOT_PATH};
use deskrelay_server::config::{init_deskrelay_server_config, DeskrelayServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::level_filters::LevelFilter;

mod api;
mod config;

#[derive(Parser, Clone)]
#[command(name = "deskrelayd")]
#[command(bin_name = "deskrelayd")]
#[command(author, version, about = "run the deskrelay front end", long_about = None)]
pub(crate) struct DeskrelayArgs {
    #[arg(short, long, default_value_t = DESKRELAY_DEFAULT_API_PORT)]
    pub port: u16,

    /// directory holding credentials.json, templates.json and views/
    #[clap(long, default_value = DESKRELAY_DEFAULT_ROOT_PATH)]
    pub root_path: String,

    /// leave the user directory empty instead of querying the vendor at startup
    #[clap(long, default_value_t = false)]
    pub skip_user_prefetch: bool,
}

impl Into<DeskrelayServerConfig> for DeskrelayArgs {
    fn into(self) -> DeskrelayServerConfig {
        DeskrelayServerConfig {
            root_path: self.root_path,
            prefetch_users: !self.skip_user_prefetch,
        }
    }
}

impl Into<config::DeskrelayConfig> for DeskrelayArgs {
    fn into(self) -> config::DeskrelayConfig {
        config::DeskrelayConfig {
            api_port: self.port,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(LevelFilter::INFO)
        .with_thread_ids(true)
        .with_thread_names(true)
        .init();

    let args = DeskrelayArgs::parse();

    let arg_clone = args.clone();
    init_deskrelay_server_config(arg_clone.into());
    config::init_deskrelay_config(args.into());

    run_main()
}

#[tokio::main]
async fn run_main() -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    // config files and the directory prefetch must land before the listener binds
    deskrelay_server::init().await?;

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_clone.cancel();
        }
    });

    api::start(cancel).await
}

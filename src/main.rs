mod bootstrap;
mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 先加载配置，日志过滤级别来自配置文件
    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    bootstrap::init_tracing_subscriber(&config.logging)?;

    let runtime = bootstrap::create_runtime()?;
    match cli.command {
        Commands::Phone { inputs, paste } => runtime.block_on(commands::phone::run(inputs, paste)),
        Commands::Upload { paths, drop, clear } => {
            runtime.block_on(commands::upload::run(&config, paths, drop, clear))
        }
        Commands::Password { clicks } => commands::password::run(&config, clicks),
    }
}

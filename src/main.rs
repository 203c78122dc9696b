use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use chatterly_rooms::config::AppConfig;
use chatterly_rooms::logging::init_tracing;
use chatterly_rooms::router;
use chatterly_rooms::server::RoomsServer;

/// 命令行参数 / Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "chatterly-rooms HTTP Server", long_about = None)]
struct Args {
    /// 指定配置文件路径 / Specify config file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: String,

    /// 覆盖监听地址 / Override listen host
    #[arg(long)]
    host: Option<String>,

    /// 覆盖监听端口 / Override listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // 初始化日志 / Initialize logging
    init_tracing(&config.logging.level)?;

    info!("🎯 Starting chatterly-rooms server...");
    info!("🔧 Loaded config file: {}", args.config);

    let server = Arc::new(RoomsServer::new(&config)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("🌐 HTTP Server starting on http://{}", addr);
    info!("📡 Command endpoints mounted under /v1/rooms/*");

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
                    .add((
                        "Access-Control-Allow-Methods",
                        "GET, POST, PUT, DELETE, OPTIONS",
                    )),
            )
            .app_data(web::Data::new(server.clone()))
            .configure(router::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}

use std::sync::Arc;

use actix_easy_multipart::MultipartFormConfig;
use actix_web::web;
use colored::Colorize;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::infrastructure::config::{build_config, AppConfig};
use crate::infrastructure::ServiceProvider;

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    if let Err(e) = initialize_telemetry() {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    }

    let service_provider = match ServiceProvider::build(&config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };

    tokio::select! {
        _ = initialize_web_host(config, service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

fn initialize_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn initialize_web_host(config: AppConfig, sp: Arc<ServiceProvider>) {
    let host = config.host.clone();
    let upload_limit = config.document_storage.max_size;

    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(MultipartFormConfig::default().total_limit(upload_limit))
            .app_data(web::Data::from(sp.clone()))
            .service(
                web::scope("")
                    .service(api::work_order::create_work_order)
                    .service(api::work_order::get_work_order)
                    .service(api::work_order::list_work_orders)
                    .service(api::work_order::approve_work_order)
                    .service(api::work_order::reject_work_order)
                    .service(api::work_order::resubmit_work_order)
                    .service(api::work_order::request_completion)
                    .service(api::work_order::approve_completion)
                    .service(api::work_order::reject_completion)
                    .service(api::work_order_detail::add_finding)
                    .service(api::work_order_detail::list_findings)
                    .service(api::work_order_detail::delete_finding)
                    .service(api::work_order_detail::add_action)
                    .service(api::work_order_detail::list_actions)
                    .service(api::work_order_detail::delete_action)
                    .service(api::work_order_detail::add_spare_part)
                    .service(api::work_order_detail::list_spare_parts)
                    .service(api::work_order_detail::delete_spare_part)
                    .service(api::work_order_detail::assign_technician)
                    .service(api::work_order_detail::unassign_technician)
                    .service(api::work_order_detail::list_technicians)
                    .service(api::document::upload_reference_document)
                    .service(api::document::delete_reference_document)
                    .service(api::report::progress_report)
                    .service(api::report::technician_performance_report)
                    .service(api::notification::list_notifications)
                    .service(api::notification::mark_notification_read),
            )
    })
    .bind((host.bind_address.as_str(), host.port));

    match server {
        Ok(server) => {
            info!("Starting web host on {}:{}.", host.bind_address, host.port);
            if let Err(e) = server.run().await {
                error!("Web host stopped unexpectedly: {e}");
            }
        }
        Err(e) => {
            error!("Cannot bind {}:{}: {e}", host.bind_address, host.port);
        }
    }
}

use std::convert::Infallible;
use std::net::SocketAddr;

use anyhow::Error;
use bytes::Bytes;
use clap::Parser;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use args::{Args, SubCommands};
use clients::groq::provider;
use config::get_medibot_port;
use handler::chat::handle_chat;
use handler::home::handle_home;

mod args;
mod clients;
mod config;
mod handler;
mod models;
mod prompt;

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    info!("Received request: {} {}", req.method(), req.uri().path());

    match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => Ok(handle_home()),

        (&Method::POST, "/chat") => {
            let whole_body = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    error!("Error reading request body: {}", e);
                    return Ok(handler::chat::internal_error());
                }
            };
            Ok(handle_chat(provider(), whole_body).await)
        }

        _ => {
            let mut not_found = Response::new(Full::new(Bytes::from("Not Found")));
            *not_found.status_mut() = StatusCode::NOT_FOUND;
            Ok(not_found)
        }
    }
}

async fn start_server() -> Result<(), Error> {
    // Build the provider client up front so a missing key warns at startup
    let _ = provider();

    let port = get_medibot_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, service_fn(handle))
                .await
            {
                error!("Error serving connection: {:?}", err);
            }
        });
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "medibot=info".to_string()),
        )
        .init();
    let args = Args::parse();
    match args.subcmd {
        Some(SubCommands::Start(_)) | None => {
            start_server().await?;
        }
    };
    Ok(())
}

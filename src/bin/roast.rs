// Terminal front-end: roast a local image through a running server.
//
//     roast <image>... [server-url]
//
// The paths are treated like files dropped on the page: only the first one
// is used. An argument starting with http:// or https:// is the server URL,
// which otherwise falls back to $ROAST_SERVER, then http://localhost:3000.

use ai_image_roaster::client::{
    render, ClientError, DropZone, FileCandidate, HttpRoastApi, RoastApi, Session,
};
use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (urls, paths): (Vec<String>, Vec<String>) = std::env::args()
        .skip(1)
        .partition(|arg| arg.starts_with("http://") || arg.starts_with("https://"));
    let server = urls
        .into_iter()
        .next()
        .or_else(|| std::env::var("ROAST_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());

    let dropped = paths.len();
    let mut zone = DropZone::default();
    zone.drag_enter();
    let Some(path) = zone.drop_files(paths.into_iter().map(PathBuf::from)) else {
        bail!("usage: roast <image>... [server-url]");
    };
    if dropped > 1 {
        tracing::warn!(ignored = dropped - 1, "only the first file is roasted");
    }

    let file = FileCandidate::from_path(&path)
        .await
        .with_context(|| format!("cannot open {}", path.display()))?;

    let mut session = Session::new();
    session.select(&file).await;
    println!("{}", render(session.state()));

    if let Some(image) = session.begin_submit() {
        println!("{}", render(session.state()));
        let outcome = HttpRoastApi::new(server).roast(&image).await;
        if let Err(ClientError::Rejected { status, .. }) = &outcome {
            eprintln!("server answered {}", status);
        }
        session.finish_submit(outcome);
        println!("{}", render(session.state()));
    }

    if session.state().error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}

use iproov_demo_server::docs::ApiDoc;
use std::io::{stdout, Write};
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

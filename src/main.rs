use airports_json::error::Result;
use airports_json::utils::init_logging;
use airports_json::{Destination, Pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    Pipeline::new(Destination::Stdout)
        .with_progress(true)
        .run()
        .await?;
    Ok(())
}

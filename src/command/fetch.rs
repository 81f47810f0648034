use calm_io::stderrln;
use canvas_client::operations::tile_history::{self, TileHistoryInput};
use clap::Parser;
use console::style;

use crate::command::CanvasOutput;
use crate::error::Context;
use crate::options::{ActOpt, ClientOpt, OutputOpt, RegionOpt};
use crate::persist::ResultPersister;
use crate::utils::effect::write_file::FsWriteFile;
use crate::utils::env::CanvasEnv;
use crate::{CanvasError, CanvasResult};

/// Fetch the edit history of every tile in a region and write it to a JSON file
#[derive(Debug, Clone, Parser)]
pub struct Fetch {
    #[clap(flatten)]
    region: RegionOpt,

    #[clap(flatten)]
    act: ActOpt,

    #[clap(flatten)]
    client: ClientOpt,

    #[clap(flatten)]
    output: OutputOpt,
}

impl Fetch {
    pub fn run(&self, env: &CanvasEnv) -> CanvasResult<CanvasOutput> {
        let client_config = self.client.get_client_config(env)?;
        let client = client_config.get_client()?;
        let region = self.region.region();
        stderrln!(
            "Fetching tile history for {} from {} using a token from {:?}.",
            style(region).cyan(),
            style(client_config.endpoint()).cyan(),
            client_config.credential().origin()
        )?;

        let input = TileHistoryInput {
            region,
            policy: self.region.inverted_region,
            params: self.act.params(),
        };
        let persister = ResultPersister::new(self.output.output_dir.clone(), FsWriteFile::default());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("could not start the async runtime")?;
        runtime.block_on(async {
            let response = tile_history::run(input, &client).await?;
            let path = persister.persist(&response.region, &response.data).await?;
            Ok::<_, CanvasError>(CanvasOutput::HistoryWritten {
                path,
                cell_count: response.cell_count,
            })
        })
    }
}

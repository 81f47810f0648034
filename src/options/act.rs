use canvas_client::operations::tile_history::{ActParams, DEFAULT_ACTION_NAME};
use clap::Parser;

/// The constants sent with every cell in a batch.
#[derive(Debug, Clone, Parser)]
pub struct ActOpt {
    /// Action requested from the canvas for each cell
    #[arg(long = "action-name", default_value = DEFAULT_ACTION_NAME)]
    pub action_name: String,

    /// Which canvas quadrant to read from
    #[arg(long = "canvas-index", default_value_t = 0)]
    pub canvas_index: u32,

    /// Color index sent alongside each coordinate
    #[arg(long = "color-index", default_value_t = 0)]
    pub color_index: u32,
}

impl ActOpt {
    pub fn params(&self) -> ActParams {
        ActParams {
            action_name: self.action_name.clone(),
            canvas_index: self.canvas_index,
            color_index: self.color_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn defaults_match_the_tile_history_action() {
        let opt = ActOpt::try_parse_from(["act"]).unwrap();
        assert_that!(opt.params()).is_equal_to(ActParams::default());
    }

    #[test]
    fn every_constant_can_be_overridden() {
        let opt = ActOpt::try_parse_from([
            "act",
            "--action-name",
            "r/replace:other",
            "--canvas-index",
            "3",
            "--color-index",
            "12",
        ])
        .unwrap();

        assert_that!(opt.params()).is_equal_to(ActParams {
            action_name: "r/replace:other".to_string(),
            canvas_index: 3,
            color_index: 12,
        });
    }
}

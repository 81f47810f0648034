use canvas_client::region::{Coordinate, InvertedRegionPolicy, Region};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
pub struct RegionOpt {
    /// First corner of the region, as `x,y`
    #[arg(long, allow_hyphen_values = true)]
    pub start: Coordinate,

    /// Opposite corner of the region, as `x,y`. Both corners are included.
    #[arg(long, allow_hyphen_values = true)]
    pub end: Coordinate,

    /// What to do when --start lies past --end on either axis: `empty`
    /// sends a batch with no cells, `reject` fails before anything is sent
    #[arg(long = "inverted-region", default_value_t = InvertedRegionPolicy::Empty)]
    pub inverted_region: InvertedRegionPolicy,
}

impl RegionOpt {
    pub const fn region(&self) -> Region {
        Region::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_accepts_negative_corners() {
        let opt = RegionOpt::try_parse_from(["region", "--start", "-2,-3", "--end", "4,5"]).unwrap();

        assert_that!(opt.region()).is_equal_to(Region::new(
            Coordinate::new(-2, -3),
            Coordinate::new(4, 5),
        ));
        assert_that!(opt.inverted_region).is_equal_to(InvertedRegionPolicy::Empty);
    }

    #[test]
    fn it_rejects_malformed_corners() {
        let opt = RegionOpt::try_parse_from(["region", "--start", "1;2", "--end", "4,5"]);
        assert_that!(opt).is_err();
    }

    #[test]
    fn it_reads_the_inverted_region_policy() {
        let opt = RegionOpt::try_parse_from([
            "region",
            "--start",
            "3,3",
            "--end",
            "1,1",
            "--inverted-region",
            "reject",
        ])
        .unwrap();

        assert_that!(opt.inverted_region).is_equal_to(InvertedRegionPolicy::Reject);
    }
}

/// "tile history" batch: last editor and timestamp for every cell of a region
pub mod tile_history;

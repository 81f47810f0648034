pub mod write_file;

pub mod write_png;

pub mod png_stream;

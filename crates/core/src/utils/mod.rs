pub mod number_format;

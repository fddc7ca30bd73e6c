mod io_utils;
mod readers;
mod util;

pub use io_utils::{create_writer, write_atomically};
pub use readers::open_text_reader;
pub use util::{handle_error_and_exit, in_file, Result};

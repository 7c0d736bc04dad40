pub mod check;
pub mod classify;
pub mod error;
pub mod load;
pub mod output;
pub mod reporter;

pub use check::{check_url, process_urls, render_result};
pub use classify::{Classification, StatusColor, classify};
pub use error::LoadError;
pub use load::{load_urls_from_file, parse_url_lines};
pub use reporter::{ConsoleReporter, Reporter};

pub fn print_banner() {
    println!();
    println!("START CHECK ...");
    println!();
}

use std::process;

fn main() {
    if let Err(e) = xcode_compdb::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(-1);
    }
}

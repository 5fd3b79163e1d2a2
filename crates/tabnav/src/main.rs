use tabnav_core::logging::init_logging;

mod app;
pub(crate) mod color;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    if let Err(e) = commands::run_command(&matches) {
        // Handlers print the user-facing message before returning.
        drop(e);
        std::process::exit(1);
    }
}

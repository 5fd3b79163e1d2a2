use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("tabnav")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive a headless navigation router from recipes and scripts")
        .long_about("tabnav runs the application's navigation router without a UI. Apply built-in recipes or JSON scripts of router steps and inspect the resulting flow, tab, stacks, overlays and the navigation events emitted along the way.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Extra config file applied on top of user and project config")
                .value_name("PATH")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

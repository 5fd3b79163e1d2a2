use clap::{Arg, ArgAction, Command};

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn recipes_command() -> Command {
    Command::new("recipes")
        .about("List built-in navigation recipes")
        .arg(json_arg())
}

pub fn recipe_command() -> Command {
    Command::new("recipe")
        .about("Run recipes on a fresh router and print the result")
        .arg(
            Arg::new("name")
                .help("Recipe names, applied in order (see 'tabnav recipes')")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(json_arg())
}

pub fn replay_command() -> Command {
    Command::new("replay")
        .about("Apply a JSON navigation script to a fresh router and print the result")
        .arg(
            Arg::new("script")
                .help("Path to a script file, or the name of a script saved in ~/.tabnav/scripts")
                .required(true)
                .index(1),
        )
        .arg(json_arg())
}

mod global;
mod navigation;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(navigation::recipes_command())
        .subcommand(navigation::recipe_command())
        .subcommand(navigation::replay_command())
}

// App layer: the CLI subcommands, written against any `Write` so they can be tested.

pub mod commands;

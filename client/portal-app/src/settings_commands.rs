use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the editable fields
    Show,
    /// Save a single field
    Set {
        /// name, email, password, dni or celular
        field: String,
        value: String,
    },
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the cached user and their favorite movies
    Show,

    /// Update account fields
    Edit {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birthday: Option<String>,
    },

    /// Delete the account and forget the session
    Delete,
}

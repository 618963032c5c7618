use clap::Subcommand;

#[derive(Subcommand)]
pub enum MovieCommands {
    /// List all movies
    List,

    /// Get a movie by title
    Get {
        /// Movie title
        title: String,
    },
}

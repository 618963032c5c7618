use clap::Subcommand;

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// List favorite movie ids as stored on the server
    List,

    /// Add a movie to favorites
    Add {
        /// Movie ID
        movie_id: String,
    },

    /// Remove a movie from favorites
    Remove {
        /// Movie ID
        movie_id: String,
    },

    /// Check the cached favorites for a movie (no network)
    Check {
        /// Movie ID
        movie_id: String,
    },
}

use crate::{
    favorite_commands::FavoriteCommands, movie_commands::MovieCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        email: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birthday: String,
    },

    /// Log in and remember the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Movie catalog
    Movies {
        #[command(subcommand)]
        action: MovieCommands,
    },

    /// Show a director
    Director {
        /// Director name
        name: String,
    },

    /// Show a genre
    Genre {
        /// Genre name
        name: String,
    },

    /// Favorite movies of the logged-in user
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommands,
    },

    /// The logged-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

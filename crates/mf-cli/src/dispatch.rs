//! Command handlers: call the client, persist session changes, shape output.

use crate::{
    CliClientResult, Client, commands::Commands, favorite_commands::FavoriteCommands,
    movie_commands::MovieCommands, profile_commands::ProfileCommands,
};

use log::{info, warn};
use mf_core::{Credentials, Movie, User, UserDetails, UserUpdate};
use serde_json::{Value, json};

/// Run one command to completion and return what should be printed.
pub async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Register {
            username,
            password,
            email,
            birthday,
        } => {
            let details = UserDetails {
                username,
                password,
                email,
                birthday,
            };
            let user = client.register(&details).await?;
            info!("Registered '{}'", user.username().unwrap_or_default());
            Ok(serde_json::to_value(user)?)
        }

        Commands::Login { username, password } => {
            let login = client
                .login(&Credentials::new(username, password))
                .await?;
            client.session().establish(&login)?;
            info!(
                "Logged in as '{}'",
                login.user.username().unwrap_or_default()
            );
            Ok(json!({ "user": login.user }))
        }

        Commands::Logout => {
            client.session().clear()?;
            Ok(json!({ "logged_out": true }))
        }

        Commands::Movies { action } => match action {
            MovieCommands::List => Ok(serde_json::to_value(client.list_movies().await?)?),
            MovieCommands::Get { title } => {
                Ok(serde_json::to_value(client.get_movie(&title).await?)?)
            }
        },

        Commands::Director { name } => {
            Ok(serde_json::to_value(client.get_director(&name).await?)?)
        }

        Commands::Genre { name } => Ok(serde_json::to_value(client.get_genre(&name).await?)?),

        Commands::Favorites { action } => match action {
            FavoriteCommands::List => {
                Ok(serde_json::to_value(client.list_favorite_movies().await?)?)
            }
            FavoriteCommands::Add { movie_id } => client.add_favorite(&movie_id).await,
            FavoriteCommands::Remove { movie_id } => client.remove_favorite(&movie_id).await,
            FavoriteCommands::Check { movie_id } => {
                let favorite = client.is_favorite(&movie_id)?;
                Ok(json!({ "movie_id": movie_id, "favorite": favorite }))
            }
        },

        Commands::Profile { action } => match action {
            ProfileCommands::Show => show_profile(client).await,
            ProfileCommands::Edit {
                username,
                password,
                email,
                birthday,
            } => {
                let update = UserUpdate {
                    username,
                    password,
                    email,
                    birthday,
                };
                update.validate()?;

                let user = client.edit_user(&update).await?;
                client.session().set_user(&user)?;
                Ok(serde_json::to_value(user)?)
            }
            ProfileCommands::Delete => {
                let response = client.delete_user().await?;
                client.session().clear()?;
                Ok(json!({ "deleted": true, "response": response }))
            }
        },
    }
}

/// Cached user plus the catalog entries whose ids are in its favorites.
async fn show_profile(client: &Client) -> CliClientResult<Value> {
    let mut user = client.cached_user()?;
    format_birthday(&mut user);

    let favorite_movies: Vec<Movie> = client
        .list_movies()
        .await?
        .into_iter()
        .filter(|movie| movie.id().is_some_and(|id| user.is_favorite(id)))
        .collect();

    Ok(json!({
        "user": user,
        "favorite_movies": favorite_movies,
    }))
}

/// Render the birthday as `YYYY-MM-DD` (UTC). Unparseable values are left as stored.
fn format_birthday(user: &mut User) {
    match user.birthday_date() {
        Ok(Some(date)) => user.set_birthday(date.format("%Y-%m-%d").to_string()),
        Ok(None) => {}
        Err(e) => warn!("Leaving birthday unformatted: {}", e),
    }
}

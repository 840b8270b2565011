mod browse;
mod login;
mod search;
mod settings;
mod user_profile;
mod users;

pub use browse::Browse;
pub use login::Login;
pub use search::Search;
pub use settings::Settings;
pub use user_profile::UserProfile;
pub use users::Users;

use super::lenient::record;

record! {
    /// The user the API key belongs to (`/v1/whoami`).
    pub struct WhoAmI {
        pub id: i64,
        pub username: String,
        pub contact_id: i64,
        pub name: String,
        pub email: String,
        pub user_type: String,
        pub last_login: String,
        pub status: String,
    }
}

record! {
    /// Account profile (`/v1/profile`).
    pub struct Profile {
        pub name: String,
        pub email: String,
        pub telephone: String,
        pub website: String,
    }
}

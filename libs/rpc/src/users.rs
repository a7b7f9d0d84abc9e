// Wire types for `proto/users.proto`.

pub const SERVICE_NAME: &str = "users.UsersService";

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserFromJwtRequest {
    #[prost(string, tag = "1")]
    pub jwt_token: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetUserFromJwtResponse {
    #[prost(message, optional, tag = "1")]
    pub user: Option<User>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub full_name: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

include!(concat!(env!("OUT_DIR"), "/users.UsersService.rs"));

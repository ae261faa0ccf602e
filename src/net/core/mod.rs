mod friends;
mod messages;
mod network;
mod notifications;
mod posts;
mod users;

pub use network::SocialNetwork;

mod message;
mod user;

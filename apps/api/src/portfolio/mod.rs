// Read-only portfolio content served to the client.

pub mod data;
pub mod handlers;

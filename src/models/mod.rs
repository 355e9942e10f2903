pub mod id;
pub mod organization;
pub mod ticket;
pub mod user;

pub use id::RecordId;
pub use organization::Organization;
pub use ticket::Ticket;
pub use user::User;

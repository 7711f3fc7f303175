pub mod create_ticket;
pub mod create_user;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod ticket_detail;
pub mod tickets;
pub mod users;

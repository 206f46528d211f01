pub mod contact;
pub mod notification;

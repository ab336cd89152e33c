pub mod icons;
pub mod issues;
pub mod layout;
pub mod login;
pub mod notifications;

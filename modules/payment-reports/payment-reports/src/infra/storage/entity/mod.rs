pub mod company;
pub mod payment;
pub mod personal_info;
pub mod user;

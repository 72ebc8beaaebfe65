pub mod accounts;
pub mod customizations;
pub mod network;

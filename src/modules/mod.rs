pub mod navigation;
pub mod permissions;

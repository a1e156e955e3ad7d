pub mod home;
pub mod work;

pub mod badge;
pub mod copy_email;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod phone_mock;
pub mod qr_code;
pub mod ticket_app;
pub mod tool_logo;

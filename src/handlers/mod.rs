pub mod login;
pub mod otp_code;
pub mod reset_password;

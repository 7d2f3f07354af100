mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod notes;
pub use notes::Notes;

mod practice;
pub use practice::Practice;

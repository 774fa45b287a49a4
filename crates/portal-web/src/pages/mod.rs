mod greeting;
mod login;

pub use greeting::GreetingPage;
pub use login::LoginPage;

mod login;
mod page;

pub use login::Login;
pub use page::Page;

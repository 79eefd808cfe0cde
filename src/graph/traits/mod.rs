mod r#match;
mod proximity;
mod route;

pub use proximity::Scan;
pub use r#match::Match;
pub use route::Route;

mod handler;
mod model;

pub use handler::random_user;
pub use model::RandomUserQuery;

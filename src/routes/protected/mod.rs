mod handler;

pub use handler::protected;

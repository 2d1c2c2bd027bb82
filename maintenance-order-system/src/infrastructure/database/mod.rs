pub mod model;
mod orm;

pub use orm::OrmRepo;

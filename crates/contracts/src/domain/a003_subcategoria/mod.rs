pub mod aggregate;

pub use aggregate::Subcategoria;

pub mod aggregate;

pub use aggregate::{Categoria, CategoriaId};

pub mod aggregate;

pub use aggregate::{Projeto, ProjetoId};

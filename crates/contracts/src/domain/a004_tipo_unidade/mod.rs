pub mod aggregate;

pub use aggregate::TipoUnidade;

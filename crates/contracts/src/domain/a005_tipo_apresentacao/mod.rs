pub mod aggregate;

pub use aggregate::TipoApresentacao;

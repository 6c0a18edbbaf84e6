pub mod common;

pub mod a001_projeto;
pub mod a002_categoria;
pub mod a003_subcategoria;
pub mod a004_tipo_unidade;
pub mod a005_tipo_apresentacao;
pub mod a010_controle_indicador;

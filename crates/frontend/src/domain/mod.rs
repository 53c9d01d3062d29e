pub mod a001_nivel4;
pub mod a002_departamento;
pub mod a003_grupo;
pub mod a004_subgrupo;
pub mod common;

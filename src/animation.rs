pub mod ease;
pub mod track;

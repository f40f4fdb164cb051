// Domain modules

pub mod tukang;

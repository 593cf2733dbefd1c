pub mod cli;
pub mod convert;
pub mod io;
pub mod map;

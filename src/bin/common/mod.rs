pub mod helpers;
pub mod io;

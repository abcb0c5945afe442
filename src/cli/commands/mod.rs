pub mod check;
pub mod extract;
mod helper;
pub mod init;
pub mod serve;
pub mod set;
